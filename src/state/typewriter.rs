/// Delay between two typed characters.
pub const TYPE_MS: u64 = 80;
/// How long a fully typed role stays on screen before the next one starts.
pub const HOLD_MS: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeStep {
    /// One more character is visible; tick again after [`TYPE_MS`].
    Typed,
    /// The role is complete; call [`Typewriter::next_role`] after [`HOLD_MS`].
    Complete,
}

/// Types a list of phrases one character at a time, cycling through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Typewriter {
    roles: &'static [&'static str],
    role: usize,
    typed: usize,
}

impl Typewriter {
    pub fn new(roles: &'static [&'static str]) -> Self {
        Self {
            roles,
            role: 0,
            typed: 0,
        }
    }

    fn current(&self) -> &'static str {
        self.roles.get(self.role).copied().unwrap_or_default()
    }

    pub fn tick(&mut self) -> TypeStep {
        if self.typed < self.current().chars().count() {
            self.typed += 1;
            TypeStep::Typed
        } else {
            TypeStep::Complete
        }
    }

    pub fn next_role(&mut self) {
        if !self.roles.is_empty() {
            self.role = (self.role + 1) % self.roles.len();
        }
        self.typed = 0;
    }

    pub fn role_index(&self) -> usize {
        self.role
    }

    /// The visible prefix of the current role.
    pub fn text(&self) -> &'static str {
        let current = self.current();
        let end = current
            .char_indices()
            .nth(self.typed)
            .map_or(current.len(), |(i, _)| i);
        &current[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static ROLES: &[&str] = &["Dev", "API ✨"];

    #[test]
    fn test_types_one_char_per_tick() {
        let mut tw = Typewriter::new(ROLES);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.tick(), TypeStep::Typed);
        assert_eq!(tw.text(), "D");
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "Dev");
        assert_eq!(tw.tick(), TypeStep::Complete);
        assert_eq!(tw.text(), "Dev");
    }

    #[test]
    fn test_multibyte_prefixes() {
        let mut tw = Typewriter::new(ROLES);
        tw.next_role();
        let mut steps = 0;
        while tw.tick() == TypeStep::Typed {
            steps += 1;
        }
        assert_eq!(steps, 5);
        assert_eq!(tw.text(), "API ✨");
    }

    #[test]
    fn test_roles_wrap() {
        let mut tw = Typewriter::new(ROLES);
        tw.tick();
        tw.next_role();
        assert_eq!(tw.role_index(), 1);
        assert_eq!(tw.text(), "");
        tw.next_role();
        assert_eq!(tw.role_index(), 0);
    }
}
