use budgetwise::client::api::export::ExportKind;

use super::*;

/// Tests downloading each export as raw bytes.
///
/// Expected: Ok with the body returned byte for byte, one request per kind
#[tokio::test]
async fn downloads_each_export_kind() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let pdf = test
        .api()
        .create_download_endpoint("/api/export/pdf", "application/pdf", b"%PDF-1.4\n");
    let csv = test.api().create_download_endpoint(
        "/api/export/csv",
        "text/csv",
        b"date,type,amount\n2024-01-01,EXPENSE,50.0\n",
    );
    let backup = test.api().create_download_endpoint(
        "/api/export/backup",
        "application/json",
        br#"{"transactions":[]}"#,
    );

    let api = test.authorized_api();

    assert_eq!(
        api.export(ExportKind::Pdf).await,
        Ok(b"%PDF-1.4\n".to_vec())
    );
    assert_eq!(
        api.export(ExportKind::Csv).await,
        Ok(b"date,type,amount\n2024-01-01,EXPENSE,50.0\n".to_vec())
    );
    assert_eq!(
        api.export(ExportKind::Backup).await,
        Ok(br#"{"transactions":[]}"#.to_vec())
    );

    pdf.assert();
    csv.assert();
    backup.assert();

    Ok(())
}

/// Tests a failed export.
///
/// Expected: Err(FetchFailed) for export
#[tokio::test]
async fn failed_export_is_fetch_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_api_endpoint(
            "GET",
            "/api/export/pdf",
            500,
            serde_json::json!({ "message": "Renderer crashed" }),
            1,
        )
        .build()
        .await?;

    let result = test.authorized_api().export(ExportKind::Pdf).await;

    assert_eq!(
        result,
        Err(Error::FetchFailed {
            resource: "export",
            reason: "Request failed with status 500: Renderer crashed".to_string(),
        })
    );

    test.assert_mocks();

    Ok(())
}
