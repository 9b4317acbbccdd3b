//! Command line parsing and the built-in table

/// A parsed line: keyword plus everything after the first space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command<'a> {
    /// Text before the first space, or the whole line
    pub name: &'a str,
    /// Text after the first space, verbatim; `None` when there is no space
    pub argument_text: Option<&'a str>,
}

impl<'a> Command<'a> {
    pub fn parse(line: &'a str) -> Self {
        match line.split_once(' ') {
            Some((name, rest)) => Self {
                name,
                argument_text: Some(rest),
            },
            None => Self {
                name: line,
                argument_text: None,
            },
        }
    }

    /// True for a line with no characters at all
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.argument_text.is_none()
    }
}

/// Built-in commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Clear,
    Echo,
    Minifetch,
    Help,
    Ls,
    Cat,
    Create,
}

/// Static description of a built-in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinSpec {
    pub builtin: Builtin,
    pub name: &'static str,
    pub usage: &'static str,
    pub summary: &'static str,
    /// Whether the keyword must be followed by a space and argument text
    pub takes_argument: bool,
}

/// Command table, in help order
pub static BUILTINS: [BuiltinSpec; 7] = [
    BuiltinSpec {
        builtin: Builtin::Clear,
        name: "clear",
        usage: "clear",
        summary: "Clear screen",
        takes_argument: false,
    },
    BuiltinSpec {
        builtin: Builtin::Echo,
        name: "echo",
        usage: "echo <text>",
        summary: "Print text",
        takes_argument: true,
    },
    BuiltinSpec {
        builtin: Builtin::Minifetch,
        name: "minifetch",
        usage: "minifetch",
        summary: "System info",
        takes_argument: false,
    },
    BuiltinSpec {
        builtin: Builtin::Help,
        name: "help",
        usage: "help",
        summary: "Show this help",
        takes_argument: false,
    },
    BuiltinSpec {
        builtin: Builtin::Ls,
        name: "ls",
        usage: "ls",
        summary: "List blobs",
        takes_argument: false,
    },
    BuiltinSpec {
        builtin: Builtin::Cat,
        name: "cat",
        usage: "cat <name>",
        summary: "Show blob contents",
        takes_argument: true,
    },
    BuiltinSpec {
        builtin: Builtin::Create,
        name: "create",
        usage: "create <name> <content>",
        summary: "Store a new blob",
        takes_argument: true,
    },
];

impl Builtin {
    /// Exact, case-sensitive keyword lookup
    pub fn lookup(name: &str) -> Option<Self> {
        BUILTINS
            .iter()
            .find(|spec| spec.name == name)
            .map(|spec| spec.builtin)
    }

    pub fn spec(self) -> &'static BuiltinSpec {
        // The table holds every variant in declaration order.
        &BUILTINS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn usage(self) -> &'static str {
        self.spec().usage
    }

    pub fn takes_argument(self) -> bool {
        self.spec().takes_argument
    }
}
