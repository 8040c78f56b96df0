pub mod inquiry_client;
pub mod site_config_yaml;
