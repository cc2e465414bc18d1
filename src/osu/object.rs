use rosu_map::util::Pos;

/// A hit object with its stack offset already resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct OsuObject {
    pub pos: Pos,
    pub start_time: f64,
    /// Circle radius in osu!pixels.
    pub radius: f64,
    pub stack_offset: Pos,
    pub kind: OsuObjectKind,
}

impl OsuObject {
    /// Create a new [`OsuObject`] without stack offset.
    pub const fn new(pos: Pos, start_time: f64, radius: f64, kind: OsuObjectKind) -> Self {
        Self {
            pos,
            start_time,
            radius,
            stack_offset: Pos::new(0.0, 0.0),
            kind,
        }
    }

    /// Set the stack offset.
    #[must_use]
    pub const fn stack_offset(mut self, stack_offset: Pos) -> Self {
        self.stack_offset = stack_offset;

        self
    }

    pub fn end_time(&self) -> f64 {
        match self.kind {
            OsuObjectKind::Circle => self.start_time,
            OsuObjectKind::Slider(ref slider) => slider.end_time,
            OsuObjectKind::Spinner(ref spinner) => self.start_time + spinner.duration,
        }
    }

    pub const fn stacked_pos(&self) -> Pos {
        // Performed manually for const-ness
        // self.pos + self.stack_offset

        Pos::new(
            self.pos.x + self.stack_offset.x,
            self.pos.y + self.stack_offset.y,
        )
    }

    /// The position at which the object ends, *not* accounting for the stack
    /// offset.
    pub const fn end_pos(&self) -> Pos {
        match self.kind {
            OsuObjectKind::Circle | OsuObjectKind::Spinner(_) => self.pos,
            OsuObjectKind::Slider(ref slider) => slider.end_pos,
        }
    }

    pub fn stacked_end_pos(&self) -> Pos {
        self.end_pos() + self.stack_offset
    }

    pub const fn is_slider(&self) -> bool {
        matches!(self.kind, OsuObjectKind::Slider { .. })
    }

    pub const fn is_spinner(&self) -> bool {
        matches!(self.kind, OsuObjectKind::Spinner(_))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum OsuObjectKind {
    Circle,
    Slider(OsuSlider),
    Spinner(Spinner),
}

/// A slider reduced to what matters for flashlight.
#[derive(Clone, Debug, PartialEq)]
pub struct OsuSlider {
    pub end_time: f64,
    pub repeats: usize,
    /// Position of the slider tail in osu!pixels, *without* stack offset.
    pub end_pos: Pos,
}

impl OsuSlider {
    /// The amount of repeat points.
    pub const fn repeat_count(&self) -> usize {
        self.repeats
    }
}

/// A spinner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spinner {
    pub duration: f64,
}
