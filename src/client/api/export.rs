use crate::client::{
    api::{ApiClient, HttpTransport},
    error::Error,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportKind {
    Pdf,
    Csv,
    Backup,
}

impl ExportKind {
    pub const ALL: [ExportKind; 3] = [ExportKind::Pdf, ExportKind::Csv, ExportKind::Backup];

    pub fn path(&self) -> &'static str {
        match self {
            ExportKind::Pdf => "/api/export/pdf",
            ExportKind::Csv => "/api/export/csv",
            ExportKind::Backup => "/api/export/backup",
        }
    }

    /// Name the downloaded file is saved under
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportKind::Pdf => "transactions.pdf",
            ExportKind::Csv => "transactions.csv",
            ExportKind::Backup => "budgetwise_backup.json",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportKind::Pdf => "application/pdf",
            ExportKind::Csv => "text/csv",
            ExportKind::Backup => "application/json",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportKind::Pdf => "Export PDF",
            ExportKind::Csv => "Export CSV",
            ExportKind::Backup => "Backup Data",
        }
    }
}

impl<T: HttpTransport> ApiClient<T> {
    pub async fn export(&self, kind: ExportKind) -> Result<Vec<u8>, Error> {
        self.fetch_bytes("export", kind.path()).await
    }
}
