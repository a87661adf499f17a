//! The two disjoint behavior families.

/// Which slot on a duck a behavior can occupy.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum BehaviorFamily {
    Fly,
    Quack,
}

impl BehaviorFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            BehaviorFamily::Fly   => "fly",
            BehaviorFamily::Quack => "quack",
        }
    }
}

impl std::fmt::Display for BehaviorFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fold a user-supplied behavior name into the snake_case registry form.
///
/// `"RocketPowered"`, `"rocket-powered"`, `"ROCKET_POWERED"` and
/// `"rocket_powered"` all map to `"rocket_powered"`.  A `_` is inserted only
/// where a lowercase letter or digit is followed by an uppercase one.
pub(crate) fn normalize_name(name: &str) -> String {
    let mut out  = String::with_capacity(name.len() + 4);
    let mut prev = None::<char>;
    for ch in name.trim().chars() {
        match ch {
            '-' | ' ' => out.push('_'),
            c if c.is_ascii_uppercase() => {
                if prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit()) {
                    out.push('_');
                }
                out.push(c.to_ascii_lowercase());
            }
            c => out.push(c),
        }
        prev = Some(ch);
    }
    out
}
