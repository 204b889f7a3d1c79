use gasto::AppCommand;
use gasto::core::transaction::TransactionKind;
use std::fs;
use tempfile::TempDir;

mod test_utils {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub async fn create_rates_mock_server(base: &str, mock_response: &str) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/latest"))
            .and(query_param("from", base))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }

    /// Writes a config whose ledger lives inside the temp dir.
    pub fn write_config(dir: &tempfile::TempDir, frankfurter_url: &str) -> std::path::PathBuf {
        let config_path = dir.path().join("config.yaml");
        let ledger_path = dir.path().join("ledger");
        let config_content = format!(
            r#"
            currency: "EUR"
            ledger_path: "{}"
            goal:
              name: "Emergency fund"
              target: 1000.0
            providers:
              frankfurter:
                base_url: {}
        "#,
            ledger_path.display(),
            frankfurter_url
        );
        std::fs::write(&config_path, config_content).expect("Failed to write config file");
        config_path
    }
}

fn add_command(kind: TransactionKind, amount: f64, category: &str, date: &str) -> AppCommand {
    AppCommand::Add {
        kind,
        amount,
        category: category.to_string(),
        date: Some(date.to_string()),
        note: None,
    }
}

#[test_log::test(tokio::test)]
async fn test_add_list_export_flow() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&dir, "http://127.0.0.1:9");
    let config_path = config_path.to_str().unwrap();

    let commands = [
        add_command(TransactionKind::Income, 1200.0, "salary", "2024-03-01"),
        add_command(TransactionKind::Expense, 45.5, "groceries", "2024-03-02"),
        AppCommand::List { limit: 10 },
        AppCommand::Summary { currency: None },
    ];
    for command in commands {
        let result = gasto::run_command(command.clone(), Some(config_path)).await;
        assert!(result.is_ok(), "{command:?} failed with: {:?}", result.err());
    }

    let output = dir.path().join("out.csv");
    gasto::run_command(
        AppCommand::Export {
            output: output.clone(),
        },
        Some(config_path),
    )
    .await
    .expect("Export failed");

    let content = fs::read_to_string(&output).expect("Failed to read export");
    assert!(content.starts_with("date,kind,category,amount,note"));
    assert!(content.contains("2024-03-01,income,salary,1200.00"));
    assert!(content.contains("2024-03-02,expense,groceries,45.50"));
}

#[test_log::test(tokio::test)]
async fn test_add_rejects_invalid_amount() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&dir, "http://127.0.0.1:9");

    let result = gasto::run_command(
        add_command(TransactionKind::Expense, -5.0, "groceries", "2024-03-02"),
        Some(config_path.to_str().unwrap()),
    )
    .await;
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("must be positive")
    );
}

#[test_log::test(tokio::test)]
async fn test_remove_unknown_id_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&dir, "http://127.0.0.1:9");

    let result = gasto::run_command(
        AppCommand::Remove {
            id: "does-not-exist".to_string(),
        },
        Some(config_path.to_str().unwrap()),
    )
    .await;
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("No transaction found")
    );
}

#[test_log::test(tokio::test)]
async fn test_summary_with_currency_conversion_mock() {
    let mock_response = r#"{
        "amount": 1.0,
        "base": "EUR",
        "date": "2024-03-15",
        "rates": { "USD": 1.1 }
    }"#;
    let mock_server = test_utils::create_rates_mock_server("EUR", mock_response).await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&dir, &mock_server.uri());
    let config_path = config_path.to_str().unwrap();

    gasto::run_command(
        add_command(TransactionKind::Income, 100.0, "salary", "2024-03-01"),
        Some(config_path),
    )
    .await
    .expect("Add failed");

    let result = gasto::run_command(
        AppCommand::Summary {
            currency: Some("USD".to_string()),
        },
        Some(config_path),
    )
    .await;
    assert!(result.is_ok(), "Summary failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_convert_with_mock() {
    let mock_response = r#"{
        "amount": 1.0,
        "base": "EUR",
        "date": "2024-03-15",
        "rates": { "USD": 1.1 }
    }"#;
    let mock_server = test_utils::create_rates_mock_server("EUR", mock_response).await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&dir, &mock_server.uri());

    // `from` omitted, falls back to the configured currency.
    let result = gasto::run_command(
        AppCommand::Convert {
            amount: 50.0,
            from: None,
            to: "USD".to_string(),
        },
        Some(config_path.to_str().unwrap()),
    )
    .await;
    assert!(result.is_ok(), "Convert failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_forecast_and_savings_flow() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&dir, "http://127.0.0.1:9");
    let config_path = config_path.to_str().unwrap();

    let recent = chrono::Local::now().date_naive() - chrono::Days::new(10);
    let recent = recent.to_string();
    let commands = [
        add_command(TransactionKind::Income, 2000.0, "salary", &recent),
        add_command(TransactionKind::Expense, 60.0, "entertainment", &recent),
        add_command(TransactionKind::Expense, 150.0, "groceries", &recent),
        AppCommand::Forecast {
            window: 3,
            horizon: 6,
        },
        AppCommand::Savings { window: 3 },
    ];
    for command in commands {
        let result = gasto::run_command(command.clone(), Some(config_path)).await;
        assert!(result.is_ok(), "{command:?} failed with: {:?}", result.err());
    }

    // Zero-month windows are rejected before touching the ledger.
    let result = gasto::run_command(
        AppCommand::Forecast {
            window: 0,
            horizon: 6,
        },
        Some(config_path),
    )
    .await;
    assert!(result.is_err());
}

#[test_log::test(tokio::test)]
async fn test_loan_and_split_commands() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&dir, "http://127.0.0.1:9");
    let config_path = config_path.to_str().unwrap();

    let result = gasto::run_command(
        AppCommand::Loan {
            amount: 1000.0,
            rate: 12.0,
            term: 12,
        },
        Some(config_path),
    )
    .await;
    assert!(result.is_ok(), "Loan failed with: {:?}", result.err());

    let result = gasto::run_command(
        AppCommand::Split {
            total: 100.0,
            people: 3,
        },
        Some(config_path),
    )
    .await;
    assert!(result.is_ok(), "Split failed with: {:?}", result.err());

    let result = gasto::run_command(
        AppCommand::Loan {
            amount: -1.0,
            rate: 12.0,
            term: 12,
        },
        Some(config_path),
    )
    .await;
    assert!(result.is_err());
}
