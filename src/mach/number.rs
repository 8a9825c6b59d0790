use crate::error;
use crate::lang::Error;
use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Rem, Sub};

const RADIX: u64 = 1_000_000_000;
const WIDTH: usize = 9;

/// ## Arbitrary precision non-negative integer
///
/// Limbs are base 10^9, least significant first. The most significant limb
/// is never zero unless the value is zero, which is exactly one zero limb.
/// There are no negative values: subtracting a larger number gives zero.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Number {
    limbs: Vec<u32>,
}

impl Number {
    pub fn zero() -> Number {
        Number { limbs: vec![0] }
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 0
    }

    /// Builds a number from decimal digits with surrounding spaces ignored.
    /// Anything else yields zero; callers validate digits beforehand.
    pub fn from_digits(s: &str) -> Number {
        let s = s.trim_matches(' ');
        if s.is_empty() || !s.bytes().all(|c| c.is_ascii_digit()) {
            return Number::zero();
        }
        let bytes = s.as_bytes();
        let mut limbs = Vec::with_capacity(bytes.len() / WIDTH + 1);
        let mut end = bytes.len();
        while end > 0 {
            let start = end.saturating_sub(WIDTH);
            let limb = bytes[start..end]
                .iter()
                .fold(0u32, |acc, c| acc * 10 + u32::from(c - b'0'));
            limbs.push(limb);
            end = start;
        }
        Number::normalized(limbs)
    }

    fn normalized(mut limbs: Vec<u32>) -> Number {
        while limbs.len() > 1 && limbs.last() == Some(&0) {
            limbs.pop();
        }
        if limbs.is_empty() {
            limbs.push(0);
        }
        Number { limbs }
    }

    fn times_ten(&mut self) {
        let mut carry = 0u64;
        for limb in self.limbs.iter_mut() {
            let current = u64::from(*limb) * 10 + carry;
            *limb = (current % RADIX) as u32;
            carry = current / RADIX;
        }
        if carry > 0 {
            self.limbs.push(carry as u32);
        }
    }

    fn divide_by_ten(&mut self) {
        let mut carry = 0u64;
        for limb in self.limbs.iter_mut().rev() {
            let current = carry * RADIX + u64::from(*limb);
            *limb = (current / 10) as u32;
            carry = current % 10;
        }
        let limbs = std::mem::take(&mut self.limbs);
        *self = Number::normalized(limbs);
    }

    /// Long division by repeated subtraction of a decimally shifted divisor.
    /// Division by zero gives zero for both parts; the language rejects it
    /// before getting here.
    pub fn div_rem(&self, rhs: &Number) -> (Number, Number) {
        if rhs.is_zero() {
            return (Number::zero(), Number::zero());
        }
        if self < rhs {
            return (Number::zero(), self.clone());
        }
        let mut remainder = self.clone();
        let mut divisor = rhs.clone();
        let mut shifts = 0;
        while divisor <= remainder {
            divisor.times_ten();
            shifts += 1;
        }
        let mut quotient = Number::zero();
        for _ in 0..shifts {
            divisor.divide_by_ten();
            quotient.times_ten();
            let mut digit = 0;
            while divisor <= remainder {
                remainder = &remainder - &divisor;
                digit += 1;
            }
            quotient.limbs[0] += digit;
        }
        (quotient, remainder)
    }
}

impl Default for Number {
    fn default() -> Number {
        Number::zero()
    }
}

impl From<u128> for Number {
    fn from(mut n: u128) -> Number {
        let mut limbs = vec![];
        loop {
            limbs.push((n % u128::from(RADIX)) as u32);
            n /= u128::from(RADIX);
            if n == 0 {
                break;
            }
        }
        Number { limbs }
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Number {
        Number::from(u128::from(n))
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Number {
        Number::from(u128::from(n))
    }
}

impl From<bool> for Number {
    fn from(b: bool) -> Number {
        Number::from(u32::from(b))
    }
}

impl std::str::FromStr for Number {
    type Err = Error;

    fn from_str(s: &str) -> Result<Number, Error> {
        let digits = s.trim_matches(' ');
        if digits.is_empty() || !digits.bytes().all(|c| c.is_ascii_digit()) {
            return Err(error!(InvalidInput; s));
        }
        Ok(Number::from_digits(digits))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Number) -> Ordering {
        self.limbs
            .len()
            .cmp(&other.limbs.len())
            .then_with(|| self.limbs.iter().rev().cmp(other.limbs.iter().rev()))
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Number) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a> Add<&'a Number> for &'a Number {
    type Output = Number;

    fn add(self, rhs: &Number) -> Number {
        let len = self.limbs.len().max(rhs.limbs.len());
        let mut limbs = Vec::with_capacity(len + 1);
        let mut carry = 0u64;
        for i in 0..len {
            let first = u64::from(*self.limbs.get(i).unwrap_or(&0));
            let second = u64::from(*rhs.limbs.get(i).unwrap_or(&0));
            let sum = first + second + carry;
            limbs.push((sum % RADIX) as u32);
            carry = sum / RADIX;
        }
        if carry > 0 {
            limbs.push(carry as u32);
        }
        Number { limbs }
    }
}

impl<'a> Sub<&'a Number> for &'a Number {
    type Output = Number;

    /// Saturates at zero.
    fn sub(self, rhs: &Number) -> Number {
        if self < rhs {
            return Number::zero();
        }
        let mut limbs = Vec::with_capacity(self.limbs.len());
        let mut borrow = 0u64;
        for (i, &limb) in self.limbs.iter().enumerate() {
            let mut first = u64::from(limb);
            let second = u64::from(*rhs.limbs.get(i).unwrap_or(&0)) + borrow;
            if second > first {
                first += RADIX;
                borrow = 1;
            } else {
                borrow = 0;
            }
            limbs.push((first - second) as u32);
        }
        Number::normalized(limbs)
    }
}

impl<'a> Mul<&'a Number> for &'a Number {
    type Output = Number;

    fn mul(self, rhs: &Number) -> Number {
        let mut acc = vec![0u64; self.limbs.len() + rhs.limbs.len()];
        for (i, &x) in self.limbs.iter().enumerate() {
            let mut carry = 0u64;
            for (j, &y) in rhs.limbs.iter().enumerate() {
                let current = acc[i + j] + u64::from(x) * u64::from(y) + carry;
                acc[i + j] = current % RADIX;
                carry = current / RADIX;
            }
            let mut k = i + rhs.limbs.len();
            while carry > 0 {
                let current = acc[k] + carry;
                acc[k] = current % RADIX;
                carry = current / RADIX;
                k += 1;
            }
        }
        Number::normalized(acc.into_iter().map(|limb| limb as u32).collect())
    }
}

impl<'a> Div<&'a Number> for &'a Number {
    type Output = Number;

    fn div(self, rhs: &Number) -> Number {
        self.div_rem(rhs).0
    }
}

impl<'a> Rem<&'a Number> for &'a Number {
    type Output = Number;

    fn rem(self, rhs: &Number) -> Number {
        self.div_rem(rhs).1
    }
}

macro_rules! by_value {
    ($op:ident, $method:ident) => {
        impl $op for Number {
            type Output = Number;

            fn $method(self, rhs: Number) -> Number {
                (&self).$method(&rhs)
            }
        }
    };
}

by_value!(Add, add);
by_value!(Sub, sub);
by_value!(Mul, mul);
by_value!(Div, div);
by_value!(Rem, rem);

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut limbs = self.limbs.iter().rev();
        if let Some(first) = limbs.next() {
            write!(f, "{}", first)?;
        }
        for limb in limbs {
            write!(f, "{:0width$}", limb, width = WIDTH)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Number({})", self)
    }
}
