pub mod activities_api;
pub mod activity_client;
pub mod catalog_view;
