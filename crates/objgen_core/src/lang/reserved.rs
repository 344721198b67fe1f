//! Reserved-symbol deny-list used when naming emitted class methods.
//!
//! Symbols defined by the native toolchain's standard headers (mostly C standard library macros and globals) would
//! be expanded or shadowed if an emitted method used them verbatim. The deny-list is an external, versioned input:
//! callers either take the built-in C standard library list or load their own.
//!
//! ## Notes
//! - Matching is an **exact**, case-sensitive string comparison. No prefix or case-folding heuristics.
//! - A [`ReservedSymbols`] value is immutable once built, so it can be shared across rendering workers by reference.

use std::collections::HashSet;

/// Symbols from the C standard library and the Objective-C runtime headers that collide with plain identifiers.
pub const C_STANDARD_SYMBOLS: &[&str] = &[
    // <stdio.h>
    "EOF", "BUFSIZ", "FILENAME_MAX", "FOPEN_MAX", "L_tmpnam", "SEEK_CUR", "SEEK_END", "SEEK_SET", "TMP_MAX",
    "stdin", "stdout", "stderr",
    // <errno.h>
    "EDOM", "EILSEQ", "ERANGE", "errno",
    // <limits.h>
    "CHAR_BIT", "CHAR_MAX", "CHAR_MIN", "INT_MAX", "INT_MIN", "LONG_MAX", "LONG_MIN", "SCHAR_MAX", "SCHAR_MIN",
    "SHRT_MAX", "SHRT_MIN", "UCHAR_MAX", "UINT_MAX", "ULONG_MAX", "USHRT_MAX",
    // <float.h> / <math.h>
    "DBL_MAX", "DBL_MIN", "FLT_MAX", "FLT_MIN", "HUGE_VAL", "INFINITY", "NAN", "M_PI", "M_E",
    // <stdlib.h> / <stddef.h>
    "EXIT_FAILURE", "EXIT_SUCCESS", "MB_CUR_MAX", "NULL", "RAND_MAX",
    // <signal.h>
    "SIGABRT", "SIGFPE", "SIGILL", "SIGINT", "SIGSEGV", "SIGTERM", "SIG_DFL", "SIG_ERR", "SIG_IGN",
    // <time.h> / <locale.h> / <assert.h>
    "CLOCKS_PER_SEC", "LC_ALL", "LC_COLLATE", "LC_CTYPE", "LC_MONETARY", "LC_NUMERIC", "LC_TIME", "assert",
    // <stdbool.h> and the Objective-C runtime
    "TRUE", "FALSE", "YES", "NO", "nil", "Nil", "id", "BOOL", "SEL", "IMP",
    // <string.h> / <ctype.h> functions that are commonly macros
    "index", "bzero", "isascii", "toascii",
];

/// Immutable set of reserved symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservedSymbols {
    symbols: HashSet<String>,
}

impl ReservedSymbols {
    /// Build an empty deny-list (no renaming ever happens).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the built-in C standard library deny-list.
    pub fn c_standard() -> Self {
        C_STANDARD_SYMBOLS.iter().copied().collect()
    }

    /// Parse a deny-list file: one symbol per line, `#` starts a comment, blank lines ignored.
    pub fn parse(text: &str) -> Self {
        text.lines()
            .map(|line| line.split('#').next().unwrap_or("").trim())
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// Check whether `name` collides exactly with a reserved symbol.
    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains(name)
    }

    /// Number of reserved symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the deny-list is empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ReservedSymbols {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().map(Into::into).collect(),
        }
    }
}
