// HTTP module entry point
// Request body parsing and response building shared by all handlers

pub mod body;
pub mod response;
