use clap::Parser;

/// Send one HTTP GET request and report the outcome
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Free-form tokens: `GET` selects the method, `uri=<target>` sets the target URI
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    pub tokens: Vec<String>,
}

/// What the command line asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Some token started with `GET`. GET is the only method either way.
    pub use_get: bool,
    /// Value of the first `uri=` token.
    pub uri: Option<String>,
}

impl Invocation {
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let use_get = tokens.iter().any(|t| t.as_ref().starts_with("GET"));
        let uri = tokens
            .iter()
            .map(AsRef::as_ref)
            .find(|t| t.starts_with("uri="))
            .and_then(|t| t.split_once('='))
            .map(|(_, value)| value.to_string());
        Invocation { use_get, uri }
    }
}

impl From<Args> for Invocation {
    fn from(args: Args) -> Self {
        Invocation::from_tokens(&args.tokens)
    }
}
