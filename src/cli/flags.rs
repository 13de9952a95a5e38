#[derive(Debug, Default, PartialEq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub save: bool,
    pub quiet: bool,
    pub secure: bool,
    pub entropy: bool,
    pub no_upper: bool,
    pub no_digits: bool,
    pub no_special: bool,
    /// Raw text; validated when the request is built.
    pub length: Option<String>,
    pub words: Vec<String>,
    pub number: Option<usize>,
    pub seed: Option<u64>,
    pub output: Option<String>,
}
