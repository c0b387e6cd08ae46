//! Timer-driven cycling: the hero's two-phase headline swap and the plain journey cycler.
//!
//! The hero loop is self-rescheduling. A cycle timer moves the rotator from
//! [`Phase::Idle`] to [`Phase::Animating`], a second timer of [`ANIM_MS`] commits, and only
//! then is the next cycle scheduled. Phases therefore never overlap.

/// Time between the starts of two hero cycles.
pub const CYCLE_MS: u64 = 3000;
/// Length of the slide animation. Must match the CSS keyframe duration.
pub const ANIM_MS: u64 = 550;
/// Period of the journey-phase highlight in the about section.
pub const JOURNEY_MS: u64 = 3000;

const _: () = assert!(ANIM_MS < CYCLE_MS);

/// Index into a fixed-length list that wraps around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycler {
    index: usize,
    len: usize,
}

impl Cycler {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn peek_next(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            (self.index + 1) % self.len
        }
    }

    pub fn advance(&mut self) -> usize {
        self.index = self.peek_next();
        self.index
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn flip(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Class sliding the current text out toward this direction.
    pub fn out_class(self) -> &'static str {
        match self {
            Direction::Left => "anim-out-left",
            Direction::Right => "anim-out-right",
        }
    }

    /// Class sliding the next text in from the opposite edge.
    pub fn in_class(self) -> &'static str {
        match self {
            Direction::Left => "anim-in-from-right",
            Direction::Right => "anim-in-from-left",
        }
    }

    /// The decorative rail sits on the edge the motion starts from.
    pub fn rail_class(self) -> &'static str {
        match self {
            Direction::Left => "right-0 border-r-4",
            Direction::Right => "left-0 border-l-4",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Animating,
}

/// Classes for one animated text slot during the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    pub outgoing: &'static str,
    /// Present only while animating.
    pub incoming: Option<&'static str>,
    pub rail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotator {
    cycler: Cycler,
    direction: Direction,
    phase: Phase,
}

impl Rotator {
    pub fn new(len: usize) -> Self {
        Self {
            cycler: Cycler::new(len),
            direction: Direction::Right,
            phase: Phase::Idle,
        }
    }

    pub fn index(&self) -> usize {
        self.cycler.index()
    }

    pub fn next_index(&self) -> usize {
        self.cycler.peek_next()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Direction the headline moves this cycle.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Cycle timer fired. Returns false if an animation is already running.
    pub fn begin(&mut self) -> bool {
        if self.phase == Phase::Animating {
            return false;
        }
        self.phase = Phase::Animating;
        true
    }

    /// Animation finished: advance, flip and go idle. Returns false when not animating.
    pub fn commit(&mut self) -> bool {
        if self.phase != Phase::Animating {
            return false;
        }
        self.cycler.advance();
        self.direction = self.direction.flip();
        self.phase = Phase::Idle;
        true
    }

    fn motion(&self, direction: Direction) -> Motion {
        let animating = self.phase == Phase::Animating;
        Motion {
            outgoing: if animating {
                direction.out_class()
            } else {
                "translate-x-0"
            },
            incoming: animating.then(|| direction.in_class()),
            rail: direction.rail_class(),
        }
    }

    pub fn headline_motion(&self) -> Motion {
        self.motion(self.direction)
    }

    /// The subtitle always travels against the headline.
    pub fn subtitle_motion(&self) -> Motion {
        self.motion(self.direction.flip())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_cycles(rotator: &mut Rotator, n: usize) {
        for _ in 0..n {
            assert!(rotator.begin());
            assert!(rotator.commit());
        }
    }

    #[test]
    fn test_full_lap_returns_to_start() {
        for len in [1, 2, 5, 20] {
            let mut rotator = Rotator::new(len);
            run_cycles(&mut rotator, len);
            assert_eq!(rotator.index(), 0, "len {len}");
            assert_eq!(rotator.phase(), Phase::Idle);
        }
    }

    #[test]
    fn test_direction_parity() {
        let start = Rotator::new(3).direction();
        assert_eq!(start, Direction::Right);

        let mut odd = Rotator::new(3);
        run_cycles(&mut odd, 3);
        assert_eq!(odd.direction(), start.flip());

        let mut even = Rotator::new(4);
        run_cycles(&mut even, 4);
        assert_eq!(even.direction(), start);
    }

    #[test]
    fn test_phases_do_not_overlap() {
        let mut rotator = Rotator::new(4);
        assert!(!rotator.commit());
        assert_eq!(rotator.index(), 0);

        assert!(rotator.begin());
        assert!(!rotator.begin());
        assert_eq!(rotator.index(), 0);
        assert_eq!(rotator.next_index(), 1);

        assert!(rotator.commit());
        assert_eq!(rotator.index(), 1);
        assert!(!rotator.commit());
    }

    #[test]
    fn test_subtitle_moves_against_headline() {
        let mut rotator = Rotator::new(5);
        let idle = rotator.headline_motion();
        assert_eq!(idle.outgoing, "translate-x-0");
        assert_eq!(idle.incoming, None);

        rotator.begin();
        let headline = rotator.headline_motion();
        let subtitle = rotator.subtitle_motion();
        assert_eq!(headline.outgoing, "anim-out-right");
        assert_eq!(headline.incoming, Some("anim-in-from-left"));
        assert_eq!(subtitle.outgoing, "anim-out-left");
        assert_eq!(subtitle.incoming, Some("anim-in-from-right"));
        assert_ne!(headline.rail, subtitle.rail);

        rotator.commit();
        rotator.begin();
        assert_eq!(rotator.headline_motion().outgoing, "anim-out-left");
    }

    #[test]
    fn test_cycler_wraps() {
        let mut cycler = Cycler::new(3);
        assert_eq!(cycler.advance(), 1);
        assert_eq!(cycler.advance(), 2);
        assert_eq!(cycler.advance(), 0);

        let mut empty = Cycler::new(0);
        assert_eq!(empty.advance(), 0);
    }
}
