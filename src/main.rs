use anyhow::Context;
use catalog_desk::core::ean::{ean13_check_digit, EAN13_LEN};
use catalog_desk::core::form::{ProductForm, ServiceForm};
use catalog_desk::core::CatalogApi;
use catalog_desk::core::listing::{filter_rows, render, CatalogRow, OutputFormat};
use catalog_desk::utils::error::ErrorSeverity;
use catalog_desk::utils::{logger, validation::Validate};
use catalog_desk::{
    validate_ean13, CatalogDesk, CatalogError, CliConfig, Command, HttpCatalogApi, Settings,
    Submission,
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 條碼檢查是純本機運算，不讀設定也不驗證設定
    if !cli.command.needs_api() {
        if let Command::CheckEan { code } = &cli.command {
            check_ean(code.trim());
        }
        return Ok(());
    }

    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if settings.json_logs {
        logger::init_json_logger(cli.verbose, settings.log_level.as_deref());
    } else {
        logger::init_cli_logger(cli.verbose, settings.log_level.as_deref());
    }

    tracing::info!("Starting catalog-desk");
    if cli.verbose {
        tracing::debug!("Settings: {:?}", settings);
    }

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let api = HttpCatalogApi::new(&settings).context("failed to build the catalog API client")?;
    let desk = CatalogDesk::new(api);

    if let Err(e) = run(&desk, &cli.command, &settings).await {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 4, // 表單未通過驗證
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run(
    desk: &CatalogDesk<HttpCatalogApi>,
    command: &Command,
    settings: &Settings,
) -> Result<(), CatalogError> {
    match command {
        Command::List { filter } => {
            let rows = desk.load_rows().await?;
            print_rows(&rows, filter, settings.format)?;
        }
        Command::Show { id } => {
            let item = desk.api().get_product(*id).await?;
            println!("{}", serde_json::to_string_pretty(&item)?);
        }
        Command::Units => {
            for unit in desk.load_units().await? {
                println!("{}\t{}", unit.id, unit.label());
            }
        }
        Command::AddProduct(form) => {
            report(desk.submit_product(&ProductForm::from(form), None).await?, settings.format)?;
        }
        Command::EditProduct { id, form } => {
            report(desk.submit_product(&ProductForm::from(form), Some(*id)).await?, settings.format)?;
        }
        Command::AddService(form) => {
            report(desk.submit_service(&ServiceForm::from(form), None).await?, settings.format)?;
        }
        Command::EditService { id, form } => {
            report(desk.submit_service(&ServiceForm::from(form), Some(*id)).await?, settings.format)?;
        }
        Command::Delete { id } => {
            report(desk.delete_item(*id).await?, settings.format)?;
        }
        Command::DeleteByName { name } => {
            report(desk.delete_by_name(name).await?, settings.format)?;
        }
        Command::CheckEan { code } => check_ean(code.trim()),
    }

    Ok(())
}

/// 異動已經成功，清單載入失敗只提示，不改變結束碼
fn report(submission: Submission, format: OutputFormat) -> Result<(), CatalogError> {
    println!("✅ {}", submission.message);
    match submission.rows {
        Ok(rows) => print_rows(&rows, "", format),
        Err(e) => {
            eprintln!("⚠️ Could not reload the list: {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            Ok(())
        }
    }
}

fn print_rows(rows: &[CatalogRow], filter: &str, format: OutputFormat) -> Result<(), CatalogError> {
    let visible = filter_rows(rows, filter);
    println!("{}", render(&visible, format)?);
    Ok(())
}

fn check_ean(code: &str) {
    if validate_ean13(code) {
        println!("✅ {} is a valid EAN-13", code);
        return;
    }

    println!("❌ {} is not a valid EAN-13", code);
    if code.len() == EAN13_LEN {
        if let Some(expected) = code.get(..EAN13_LEN - 1).and_then(ean13_check_digit) {
            println!("💡 Expected check digit: {}", expected);
        }
    }
}
