use clap::Parser;
use std::io::Write;
use tempfile::NamedTempFile;
use universo_platformo::domain::model::ThemeVariant;
use universo_platformo::{BootstrapArgs, Settings};

// 這個檔案只有一個測試，環境變數不會影響其他測試

#[test]
fn test_env_overrides_config_file_from_env() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[server]\nport = 9000\naddress = \"127.0.0.1\"\n")
        .unwrap();
    temp_file.write_all(b"\n[theme]\nvariant = \"light\"\n").unwrap();

    std::env::set_var("UNIVERSO_CONFIG", temp_file.path());
    std::env::set_var("SERVER_PORT", "9345");
    std::env::set_var("SERVER_ADDRESS", "127.0.0.2");

    let args = BootstrapArgs::try_parse_from(["core-server"]).unwrap();
    let settings = args.resolve(Settings::backend_defaults());

    std::env::remove_var("UNIVERSO_CONFIG");
    std::env::remove_var("SERVER_PORT");
    std::env::remove_var("SERVER_ADDRESS");

    assert_eq!(args.config.as_deref(), Some(temp_file.path()));
    assert_eq!(args.port, Some(9345));

    let settings = settings.unwrap();
    // env 勝過設定檔，設定檔勝過預設值
    assert_eq!(settings.server.port, 9345);
    assert_eq!(settings.server.address, "127.0.0.2");
    assert_eq!(settings.theme.variant, ThemeVariant::Light);
    assert_eq!(settings.theme.name, "universo");

    // 命令列參數勝過 env
    std::env::set_var("SERVER_PORT", "9345");
    let args = BootstrapArgs::try_parse_from(["core-server", "--port", "9346"]).unwrap();
    std::env::remove_var("SERVER_PORT");
    assert_eq!(args.port, Some(9346));
}
