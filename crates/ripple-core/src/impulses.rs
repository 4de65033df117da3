use crate::config::Variant;
use crate::constants::{MAX_RIPPLES, OFFSCREEN_UV, START_TIME_VEC4S};
use crate::interaction::InteractionModel;
use crate::uniforms::{DiscreteUniforms, Uniforms};
use glam::Vec2;

/// One ripple-triggering pointer sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Impulse {
    pub position: Vec2,
    pub start_time: f32,
}

impl Impulse {
    pub const EMPTY: Impulse = Impulse {
        position: Vec2::new(OFFSCREEN_UV[0], OFFSCREEN_UV[1]),
        start_time: 0.0,
    };
}

/// Discrete model: a fixed-capacity ring of impulses.
///
/// Once `MAX_RIPPLES` impulses are live, each new one overwrites the oldest,
/// so the uniform arrays never grow past their declared length.
#[derive(Clone, Debug)]
pub struct ImpulseRing {
    slots: [Impulse; MAX_RIPPLES],
    // index of the slot the next push writes to
    head: usize,
    len: usize,
    uniforms: Box<DiscreteUniforms>,
}

impl Default for ImpulseRing {
    fn default() -> Self {
        let mut uniforms = Box::new(DiscreteUniforms {
            u_time: 0.0,
            _pad: [0.0; 3],
            u_ripple_positions: [[0.0; 4]; MAX_RIPPLES],
            u_ripple_start_times: [[0.0; 4]; START_TIME_VEC4S],
        });
        for i in 0..MAX_RIPPLES {
            uniforms.set_slot(i, OFFSCREEN_UV, 0.0);
        }
        Self {
            slots: [Impulse::EMPTY; MAX_RIPPLES],
            head: 0,
            len: 0,
            uniforms,
        }
    }
}

impl ImpulseRing {
    pub const fn capacity(&self) -> usize {
        MAX_RIPPLES
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append an impulse, evicting the oldest when full. Returns the evicted
    /// impulse, if any.
    pub fn push(&mut self, impulse: Impulse) -> Option<Impulse> {
        let evicted = (self.len == MAX_RIPPLES).then(|| self.slots[self.head]);
        self.slots[self.head] = impulse;
        self.uniforms
            .set_slot(self.head, impulse.position.to_array(), impulse.start_time);
        self.head = (self.head + 1) % MAX_RIPPLES;
        self.len = (self.len + 1).min(MAX_RIPPLES);
        evicted
    }

    /// Live impulses, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Impulse> + '_ {
        let start = (self.head + MAX_RIPPLES - self.len) % MAX_RIPPLES;
        (0..self.len).map(move |i| &self.slots[(start + i) % MAX_RIPPLES])
    }

    pub fn oldest(&self) -> Option<&Impulse> {
        self.iter().next()
    }

    pub fn newest(&self) -> Option<&Impulse> {
        (self.len > 0).then(|| &self.slots[(self.head + MAX_RIPPLES - 1) % MAX_RIPPLES])
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl InteractionModel for ImpulseRing {
    fn variant(&self) -> Variant {
        Variant::Discrete
    }

    fn pointer_moved(&mut self, uv: Vec2, elapsed: f32) {
        self.push(Impulse {
            position: uv,
            start_time: elapsed,
        });
    }

    fn advance(&mut self) {}

    fn uniforms(&mut self, elapsed: f32) -> Uniforms<'_> {
        // slot order is irrelevant to the shader, so the ring is sent as stored
        self.uniforms.u_time = elapsed;
        Uniforms::Discrete(self.uniforms.as_ref())
    }

    fn uploads_on_pointer(&self) -> bool {
        true
    }
}
