pub struct Config {
    /// Skips the startup banner.
    pub no_banner: bool,
    /// Quiet level. Any value above zero hides the banner and section headers.
    ///
    /// Prompts, results and warnings are always shown.
    pub quiet: u8,
}

impl Config {
    pub fn show_headers(&self) -> bool {
        self.quiet == 0
    }

    pub fn show_banner(&self) -> bool {
        !self.no_banner && self.quiet == 0
    }
}
