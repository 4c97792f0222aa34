use clap::Parser;

#[derive(Debug, Parser)]
#[command(version, about)]
pub(crate) struct WebpifyCli {
    #[clap(
        default_value = webpify::DEFAULT_DIRECTORY,
        help = "The directory that is searched recursively for PNG files. Each one is converted to a WebP file next to it."
    )]
    pub(crate) directory: String,

    #[clap(
        allow_hyphen_values = true,
        help = "Pass 'true' (in any case) to delete each PNG after it was converted successfully. Any other value keeps the originals."
    )]
    pub(crate) delete_flag: Option<String>,

    #[clap(hide = true, allow_hyphen_values = true)]
    pub(crate) _ignored: Vec<String>,
}

impl WebpifyCli {
    pub(crate) fn delete_original(&self) -> bool {
        self.delete_flag
            .as_deref()
            .is_some_and(|delete_flag| delete_flag.eq_ignore_ascii_case("true"))
    }
}
