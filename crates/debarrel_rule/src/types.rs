#[derive(Debug, Clone)]
pub struct Warning {
    /// The original import declaration text
    pub import_statement: String,
    pub from_file: String,
    /// 1-based
    pub line: usize,
    /// 1-based, in characters
    pub column: usize,
    pub message: &'static str,
    pub replacement: Option<String>,
    /// Whether the replacement was written back to disk
    pub fixed: bool,
}

#[derive(Debug, Clone)]
pub struct CheckResult {
    pub warnings: Vec<Warning>,
    pub files_analyzed: usize,
    pub files_fixed: usize,
}

impl CheckResult {
    pub fn unfixed(&self) -> usize {
        self.warnings.iter().filter(|w| !w.fixed).count()
    }
}
