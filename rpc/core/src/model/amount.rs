use crate::{RpcError, RpcResult};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;
use std::fmt::{Display, Formatter};

/// Denominations of the ICON currency: `Loop` is the smallest unit and
/// 1 ICX = 10^18 loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Loop,
    Icx,
}

impl Unit {
    pub fn digit(&self) -> u32 {
        match self {
            Unit::Loop => 0,
            Unit::Icx => 18,
        }
    }
}

/// An ICX amount held exactly as a loop count, together with the digit of the
/// unit it is displayed in. Changing the unit never changes the loop count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconAmount {
    loops: BigInt,
    digit: u32,
}

impl IconAmount {
    pub fn from_loops(loops: impl Into<BigInt>, digit: u32) -> Self {
        Self { loops: loops.into(), digit }
    }

    /// Parses a decimal amount expressed in the unit of `digit`, e.g.
    /// `IconAmount::of("1.5", Unit::Icx.digit())` is 1.5 ICX. The fraction
    /// must fit in `digit` decimal places.
    pub fn of(text: &str, digit: u32) -> RpcResult<Self> {
        let invalid = || RpcError::InvalidAmount(text.to_string());
        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let (integral, fraction) = match unsigned.split_once('.') {
            Some((integral, fraction)) => (integral, fraction),
            None => (unsigned, ""),
        };
        if integral.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if fraction.len() as u64 > digit as u64 {
            return Err(invalid());
        }

        let mut loops = match integral {
            "" => BigUint::zero(),
            _ => integral.parse::<BigUint>().map_err(|_| invalid())?,
        };
        loops *= ten_pow(digit);
        if !fraction.is_empty() {
            let fraction_value = fraction.parse::<BigUint>().map_err(|_| invalid())?;
            loops += fraction_value * ten_pow(digit - fraction.len() as u32);
        }

        let sign = if negative { Sign::Minus } else { Sign::Plus };
        Ok(Self { loops: BigInt::from_biguint(sign, loops), digit })
    }

    pub fn to_loops(&self) -> BigInt {
        self.loops.clone()
    }

    pub fn digit(&self) -> u32 {
        self.digit
    }

    /// The same amount displayed in another unit.
    pub fn convert_unit(&self, digit: u32) -> Self {
        Self { loops: self.loops.clone(), digit }
    }
}

impl Display for IconAmount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let scale = ten_pow(self.digit);
        let magnitude = self.loops.magnitude();
        let integral = magnitude / &scale;
        let fraction = magnitude % &scale;

        if self.loops.sign() == Sign::Minus {
            f.write_str("-")?;
        }
        if fraction.is_zero() {
            return write!(f, "{integral}");
        }
        let digits = format!("{:0width$}", fraction, width = self.digit as usize);
        write!(f, "{}.{}", integral, digits.trim_end_matches('0'))
    }
}

fn ten_pow(digit: u32) -> BigUint {
    let mut result = BigUint::from(1u32);
    for _ in 0..digit {
        result *= 10u32;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_and_to_loops() {
        let amount = IconAmount::of("1.5", Unit::Icx.digit()).unwrap();
        assert_eq!(amount.to_loops(), "1500000000000000000".parse::<BigInt>().unwrap());
        assert_eq!(amount.to_string(), "1.5");

        let amount = IconAmount::of("0.01", Unit::Icx.digit()).unwrap();
        assert_eq!(amount.to_loops(), "10000000000000000".parse::<BigInt>().unwrap());
        assert_eq!(amount.to_string(), "0.01");

        let amount = IconAmount::of("-2", Unit::Icx.digit()).unwrap();
        assert_eq!(amount.to_loops(), "-2000000000000000000".parse::<BigInt>().unwrap());
        assert_eq!(amount.to_string(), "-2");

        let amount = IconAmount::of("4563918244f40000", Unit::Loop.digit());
        assert!(amount.is_err(), "loop amounts are decimal");
    }

    #[test]
    fn test_convert_unit() {
        let amount = IconAmount::of("1.5", Unit::Icx.digit()).unwrap();
        let loops = amount.convert_unit(Unit::Loop.digit());
        // the loop count is invariant under unit conversion
        assert_eq!(loops.to_loops(), amount.to_loops());
        assert_eq!(loops.to_string(), "1500000000000000000");

        let back = loops.convert_unit(Unit::Icx.digit());
        assert_eq!(back.to_string(), "1.5");
    }

    #[test]
    fn test_from_loops() {
        let amount = IconAmount::from_loops(1_000_000_000_000_000_000i64, Unit::Icx.digit());
        assert_eq!(amount.to_string(), "1");
        assert_eq!(amount.digit(), 18);
    }

    #[test]
    fn test_invalid_amounts() {
        for text in ["", "-", ".", "1.2.3", "one", "0x1", "1.2345678901234567890"] {
            assert!(IconAmount::of(text, Unit::Icx.digit()).is_err(), "case `{text}`");
        }
        // too fine for the unit
        assert!(IconAmount::of("0.5", Unit::Loop.digit()).is_err());
    }
}
