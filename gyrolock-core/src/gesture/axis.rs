//! Per-axis quantization with hysteresis
//!
//! A raw angular-rate value is reduced to one of three symbols. An axis
//! may only change symbol while it is armed; crossing the trigger disarms
//! it and it re-arms once the rate falls back inside the deadband. One
//! physical throw of the device therefore yields exactly one transition,
//! even though the rate stays pinned beyond the trigger for many samples.
//!
//! ```text
//!            > +T              > +T
//!   Negative ─────► Center ─────► Positive
//!            ◄─────        ◄─────
//!            < -T              < -T
//! ```

/// Quantized state of one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisSymbol {
    #[default]
    Center,
    Positive,
    Negative,
}

impl AxisSymbol {
    /// Symbol after a swing in the positive direction
    pub fn step_positive(self) -> Self {
        match self {
            AxisSymbol::Center => AxisSymbol::Positive,
            AxisSymbol::Negative => AxisSymbol::Center,
            AxisSymbol::Positive => AxisSymbol::Positive,
        }
    }

    /// Symbol after a swing in the negative direction
    pub fn step_negative(self) -> Self {
        match self {
            AxisSymbol::Center => AxisSymbol::Negative,
            AxisSymbol::Positive => AxisSymbol::Center,
            AxisSymbol::Negative => AxisSymbol::Negative,
        }
    }
}

/// Compute the next symbol and arm flag for one axis
///
/// `trigger` must be positive. Samples exactly at `±trigger` neither
/// fire nor re-arm.
pub fn quantize(symbol: AxisSymbol, armed: bool, sample: i16, trigger: i16) -> (AxisSymbol, bool) {
    if sample > trigger {
        if armed {
            return (symbol.step_positive(), false);
        }
    } else if sample < -trigger {
        if armed {
            return (symbol.step_negative(), false);
        }
    } else if sample < trigger && sample > -trigger {
        return (symbol, true);
    }

    (symbol, armed)
}

/// Stateful quantizer for a single axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisQuantizer {
    symbol: AxisSymbol,
    armed: bool,
    trigger: i16,
}

impl AxisQuantizer {
    /// Create a centered, armed quantizer
    pub fn new(trigger: i16) -> Self {
        Self {
            symbol: AxisSymbol::Center,
            armed: true,
            trigger,
        }
    }

    /// Return to center and re-arm
    pub fn reset(&mut self) {
        self.symbol = AxisSymbol::Center;
        self.armed = true;
    }

    /// Feed one raw sample, returning the resulting symbol
    pub fn update(&mut self, sample: i16) -> AxisSymbol {
        let (symbol, armed) = quantize(self.symbol, self.armed, sample, self.trigger);
        self.symbol = symbol;
        self.armed = armed;
        symbol
    }

    /// Current symbol
    pub fn symbol(&self) -> AxisSymbol {
        self.symbol
    }

    /// Whether the next excursion may change the symbol
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}
