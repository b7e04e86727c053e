// Logger module
// Plain stdout/stderr logging helpers shared by server and handlers

use std::net::SocketAddr;

use chrono::{DateTime, Utc};
use hyper::Method;

use crate::config::Config;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Todo service started successfully");
    println!("Listening on: http://{addr}");
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

pub fn log_server_stop() {
    println!("\n[Server] Shutting down, no longer accepting connections");
}

pub fn log_shutdown_signal(name: &str) {
    println!("\n[Signal] {name} received, initiating shutdown");
}

pub fn log_db_connected(now: &DateTime<Utc>) {
    println!("[Database] Connected, server time: {now}");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

/// Every request is logged with its method and raw target
pub fn log_request(method: &Method, target: &str) {
    println!("[Request] {method} {target}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}
