use std::str::FromStr;

use thiserror::Error;

/// Declares `Language` together with its lookup table so that a member
/// without a Carbon mode cannot exist.
macro_rules! languages {
    ($($variant:ident => $mode:literal),+ $(,)?) => {
        /// A language supported by Carbon.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum Language {
            #[default]
            $($variant),+
        }

        impl Language {
            pub const ALL: &'static [Language] = &[$(Language::$variant),+];

            /// Mode identifier Carbon expects in the `l` query parameter.
            pub fn mode(self) -> &'static str {
                match self {
                    $(Language::$variant => $mode),+
                }
            }

            pub fn name(self) -> &'static str {
                match self {
                    $(Language::$variant => stringify!($variant)),+
                }
            }
        }
    };
}

languages! {
    Auto => "auto",
    Apache => "text/apache",
    Bash => "application/x-sh",
    C => "text/x-csrc",
    CPlusPlus => "text/x-c++src",
    CSharp => "text/x-csharp",
    Clojure => "clojure",
    Cobol => "cobol",
    CoffeeScript => "coffeescript",
    Crystal => "crystal",
    Css => "css",
    D => "d",
    Dart => "dart",
    Diff => "text/x-diff",
    Django => "django",
    Docker => "dockerfile",
    Elixir => "elixir",
    Elm => "elm",
    Erlang => "erlang",
    Fortran => "fortran",
    Gherkin => "gherkin",
    GraphQl => "graphql",
    Go => "text/x-go",
    Groovy => "groovy",
    Handlebars => "handlebars",
    Haskell => "haskell",
    HtmlXml => "htmlmixed",
    Java => "text/x-java",
    JavaScript => "javascript",
    Json => "application/json",
    Jsx => "jsx",
    Julia => "julia",
    Kotlin => "text/x-kotlin",
    LaTeX => "stex",
    Lisp => "commonlisp",
    Lua => "lua",
    Markdown => "markdown",
    Mathematica => "mathematica",
    MatlabOctave => "text/x-octave",
    MySql => "text/x-mysql",
    NTriples => "application/n-triples",
    Nginx => "nginx",
    Nim => "nim",
    ObjectiveC => "text/x-objectivec",
    OCamlFSharp => "mllike",
    Pascal => "pascal",
    Perl => "perl",
    Php => "text/x-php",
    PlainText => "text",
    PowerShell => "powershell",
    Python => "python",
    R => "r",
    RiscV => "riscv",
    Ruby => "ruby",
    Rust => "rust",
    Sass => "sass",
    Scala => "text/x-scala",
    Smalltalk => "smalltalk",
    Solidity => "solidity",
    Sparql => "application/sparql-query",
    Sql => "sql",
    Stylus => "stylus",
    Swift => "swift",
    Tcl => "tcl",
    Toml => "toml",
    Turtle => "text/turtle",
    TypeScript => "application/typescript",
    Tsx => "text/typescript-jsx",
    Twig => "text/x-twig",
    VbNet => "vb",
    Verilog => "verilog",
    Vhdl => "vhdl",
    Vue => "vue",
    XQuery => "xquery",
    Yaml => "yaml",
}

/// A window style supported by Carbon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WindowTheme {
    #[default]
    RoundedEdges,
    SharpEdges,
    Outlined,
}

impl WindowTheme {
    pub const ALL: &'static [WindowTheme] = &[
        WindowTheme::RoundedEdges,
        WindowTheme::SharpEdges,
        WindowTheme::Outlined,
    ];

    /// Identifier Carbon expects in the `wt` query parameter.
    pub fn mode(self) -> &'static str {
        match self {
            WindowTheme::RoundedEdges => "none",
            WindowTheme::SharpEdges => "sharp",
            WindowTheme::Outlined => "bw",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WindowTheme::RoundedEdges => "RoundedEdges",
            WindowTheme::SharpEdges => "SharpEdges",
            WindowTheme::Outlined => "Outlined",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {input:?}")]
pub struct ParseEnumError {
    kind: &'static str,
    input: String,
}

impl FromStr for Language {
    type Err = ParseEnumError;

    /// Accepts the variant name (any case) or the Carbon mode identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .iter()
            .copied()
            .find(|l| l.name().eq_ignore_ascii_case(s) || l.mode() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "language",
                input: s.to_string(),
            })
    }
}

impl FromStr for WindowTheme {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WindowTheme::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(s) || t.mode() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "window theme",
                input: s.to_string(),
            })
    }
}
