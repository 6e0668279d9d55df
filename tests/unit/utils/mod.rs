mod test_config;
