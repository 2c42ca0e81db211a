use anyhow::Context;
use clap::Parser;
use kldb_skos::config::toml_config::TomlConfig;
use kldb_skos::core::{ConfigProvider, Statistics};
use kldb_skos::utils::error::{ConvertError, ErrorSeverity};
use kldb_skos::utils::{logger, validation::Validate};
use kldb_skos::{CliConfig, ConvertEngine, LocalStorage, TaxonomyPipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("🚀 Starting kldb-skos");

    // 載入選用的 TOML 配置，命令列參數優先
    if let Some(path) = config.config.clone() {
        tracing::info!("📁 Loading configuration from: {}", path);
        match TomlConfig::from_file(&path) {
            Ok(file) => config.merge_toml(&file),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        }
    }

    if config.verbose {
        tracing::debug!("Effective config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config);

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let dry_run = config.dry_run;
    let report_path = config.report.clone();

    // 創建存儲和管道
    let storage = LocalStorage::new(".".to_string());
    let pipeline = TaxonomyPipeline::new(storage, config);

    // 創建轉換引擎並運行
    let engine = ConvertEngine::new_with_monitoring(pipeline, monitor_enabled);

    if dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        match engine.dry_run().await {
            Ok(statistics) => {
                print_statistics(&statistics);
                println!("✅ Dry run complete. No files were written.");
            }
            Err(e) => {
                let exit_code = failure_exit_code(&e);
                if exit_code > 0 {
                    std::process::exit(exit_code);
                }
            }
        }
        return Ok(());
    }

    match engine.run().await {
        Ok(summary) => {
            print_statistics(&summary.statistics);

            tracing::info!("✅ Conversion completed successfully!");
            tracing::info!("📁 Output saved to: {}", summary.output_path);
            println!("✅ Conversion completed successfully!");
            println!("📁 Output saved to: {}", summary.output_path);

            if let Some(path) = report_path {
                let json = serde_json::to_string_pretty(&summary)
                    .context("serializing the run report")?;
                std::fs::write(&path, json)
                    .with_context(|| format!("writing the run report to '{}'", path))?;
                println!("📋 Run report written to: {}", path);
            }
        }
        Err(e) => {
            let exit_code = failure_exit_code(&e);
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

/// 記錄失敗原因並回傳對應嚴重程度的退出碼
fn failure_exit_code(e: &ConvertError) -> i32 {
    tracing::error!(
        "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    // 輸出用戶友好的錯誤信息
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    match e.severity() {
        ErrorSeverity::Low => 0,      // 警告，但成功
        ErrorSeverity::Medium => 2,   // 配置錯誤
        ErrorSeverity::High => 1,     // 處理錯誤
        ErrorSeverity::Critical => 3, // 系統錯誤
    }
}

fn display_config_summary(config: &CliConfig) {
    println!("📋 Configuration Summary:");
    println!("  Input: {}", config.input_path());
    println!("  Output: {}", config.output_path());
    println!("  Scheme: {}", config.scheme_title());
    println!("  Base URI: {}", config.base_uri());
    println!("  Language: {}", config.language());

    if config.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn print_statistics(statistics: &Statistics) {
    println!();
    println!("{}", "=".repeat(60));
    println!("STATISTIKEN");
    println!("{}", "=".repeat(60));

    for (i, count) in statistics.level_counts.iter().enumerate() {
        println!("Ebene {}: {} Konzepte", i + 1, count);
    }

    println!();
    println!("Konzepte mit Definition: {}", statistics.with_definition);
    println!("Konzepte mit Note (Fertigkeiten): {}", statistics.with_note);
    println!("Gesamt generierte Konzepte: {}", statistics.total);

    println!();
    println!("Top-Level Konzepte ({}):", statistics.top_concepts.len());
    for top in &statistics.top_concepts {
        println!("  {}: {}", top.id, top.title);
    }
}
