#![doc = r#"
CLOM — a declarative command-line option parser.

Declare each setting once (a name, its aliases, a raw default and a hint) and
get typed values back. Settings are scalar or vector strings, integers,
floats and doubles, boolean flags, or any type with a custom converter. A help
alias such as `--help` short-circuits resolution and yields a `name: hint`
listing of every declared setting, even when other options are malformed.

Resolution rules
----------------
- The first token equal to any alias of a setting wins; the token after it is
  the raw value, taken as-is even if it looks like another option.
- No alias present: the declared default is used verbatim (and converted).
- An alias that is the last token is a `MissingValue` error.
- Vector values are split on single spaces: `"3 2 1"` is `[3, 2, 1]`.
- Flags are true when any alias is present anywhere.
- A setting declared without aliases is looked up by its name.

Nothing here exits the process on its own: every operation returns
`clom::Result<T>`, and [`Error::exit`] implements the classic print-and-exit
policy for binaries (help to stdout with status 0, errors to stderr with 1).

Quick start
-----------
```rust
use clom::{ArgumentStore, Parser};

fn main() -> clom::Result<()> {
    let store = ArgumentStore::new(["--name", "Mark", "--height", "5.2", "--smart"]);

    let resolved = Parser::new()
        .string("name", &["--name", "-n"], "Mr X", "The name of our subject")
        .float("height", &["--height"], "6.0", "The height of our subject in feet")
        .flag("is_smart", &["--smart", "-s"], "Whether our subject is smart")
        .resolve_all(&store)?;

    assert_eq!(resolved.get::<String>("name")?, "Mark");
    assert_eq!(resolved.get::<f32>("height")?, 5.2);
    assert!(resolved.get::<bool>("is_smart")?);
    Ok(())
}
```

In a real program, resolve against the process arguments and let
[`Error::exit`] handle help and failures:

```rust,no_run
use clom::{ArgumentStore, Parser};

let parser = Parser::new()
    .int_vec("numbers", &["--numbers", "-ns"], "42 36 1", "a list of integers");
let resolved = parser
    .resolve_all(&ArgumentStore::from_env())
    .unwrap_or_else(|e| e.exit());
let numbers: Vec<i32> = resolved.get("numbers").unwrap_or_else(|e| e.exit());
```

Single settings and custom converters
-------------------------------------
```rust
use clom::{bind, bind_flag, custom, ArgumentStore, List, Text};

let store = ArgumentStore::new(["-ff", "mango orange", "-l", "B"]);

let fruits = bind(&store, &["--favorite-fruits", "-ff"], "apple banana cherry", "Fruits", &List(Text))?;
assert_eq!(fruits.value, ["mango", "orange"]);

let letter = custom("a letter", |s: &str| s.chars().next());
assert_eq!(bind(&store, &["--letter", "-l"], "A", "any letter", &letter)?.value, 'B');

assert!(!bind_flag(&store, &["--banner", "-b"], "a flag").value);
# Ok::<(), clom::Error>(())
```

Help
----
```rust
use clom::{ArgumentStore, Error, Parser};

let store = ArgumentStore::new(["--number", "abc", "--help"]);
let err = Parser::new()
    .int("number", &["--number", "-n"], "3", "an integer")
    .resolve_all(&store)
    .unwrap_err();

match err {
    Error::HelpRequested(listing) => assert_eq!(listing.to_string(), "number: an integer\n"),
    other => panic!("{other}"),
}
```

Useful modules
--------------
- [`api`] — the declarative [`Parser`] and the [`Resolved`] set.
- [`core`] — store, resolvers, converters, binder, help interception, declaration files.
- [`types`] — [`Kind`], [`Value`] and [`FromValue`].
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod types;

// Curated public API surface
pub use api::{Parser, ParserOptions, Resolved, ResolvedSetting};
pub use error::{Error, Result};
pub use types::{FromValue, Kind, Value};

pub use crate::core::convert::{
    Converter, Custom, Double, Float, Int, List, Parsed, Text, custom, parse_double, parse_float,
    parse_int, split_tokens,
};
pub use crate::core::help::{HelpEntry, HelpInterceptor, HelpListing, HelpState};
pub use crate::core::params::{DeclKind, DeclarationFile, SettingDecl};
pub use crate::core::resolve::{Raw, Source, find_value, is_present, resolve};
pub use crate::core::setting::{Bound, bind, bind_flag};
pub use crate::core::store::{
    ArgumentStore, global as global_store, init as init_store, init_from_env as init_store_from_env,
};
