/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Authenticated HTTP requests and pagination
pub mod http;
/// Request models for API calls
pub mod requests;
/// Declared schemas of API responses
pub mod responses;
