//! Declarative macros shared across the crate.
//!
//! `oc_err!` and `bail!` live in `errors.rs`.

/// Implement `Display` for a type from one field, or from a closure.
#[macro_export]
macro_rules! impl_display {
    ($type:ty, $field:ident) => {
        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.$field)
            }
        }
    };
    ($type:ty => $fmt:expr) => {
        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", ($fmt)(self))
            }
        }
    };
}

/// Implement `FromStr` for a simple string-keyed enum.
#[macro_export]
macro_rules! impl_from_str {
    ($type:ty, $($str:expr => $variant:expr),* $(,)?) => {
        impl std::str::FromStr for $type {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok($variant),)*
                    other => Err(format!("unknown value: {}", other)),
                }
            }
        }
    };
}

/// Log a verification/heal phase transition to stderr.
#[macro_export]
macro_rules! log_phase {
    ($phase:expr, $name:expr) => {
        eprintln!("-> phase {}: {}", $phase, $name);
    };
    ($phase:expr, $name:expr, $result:expr) => {
        let icon = if $result { "ok" } else { "fail" };
        eprintln!("[{}] phase {}: {}", icon, $phase, $name);
    };
}

/// Build a `HashMap` literal.
#[macro_export]
macro_rules! hashmap {
    () => {
        std::collections::HashMap::new()
    };
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut map = std::collections::HashMap::new();
        $(map.insert($key, $value);)*
        map
    }};
}

/// Build a `HashSet` literal.
#[macro_export]
macro_rules! hashset {
    () => {
        std::collections::HashSet::new()
    };
    ($($value:expr),* $(,)?) => {{
        let mut set = std::collections::HashSet::new();
        $(set.insert($value);)*
        set
    }};
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    #[test]
    fn test_hashmap_macro_empty() {
        let map: HashMap<String, i32> = hashmap!();
        assert!(map.is_empty());
    }

    #[test]
    fn test_hashmap_macro() {
        let map = hashmap!(
            "a" => 1,
            "b" => 2
        );
        assert_eq!(map.get("a"), Some(&1));
    }

    #[test]
    fn test_hashset_macro() {
        let set = hashset!(1, 2, 3);
        assert!(set.contains(&1));
        assert_eq!(set.len(), 3);
    }
}
