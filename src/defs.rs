use once_cell::sync::Lazy;

use crate::die::Die;

static D4: Lazy<Die> = Lazy::new(|| Die::numeric(4));
static D6: Lazy<Die> = Lazy::new(|| Die::numeric(6));
static D8: Lazy<Die> = Lazy::new(|| Die::numeric(8));
static D10: Lazy<Die> = Lazy::new(|| Die::numeric(10));
static D12: Lazy<Die> = Lazy::new(|| Die::numeric(12));
static D20: Lazy<Die> = Lazy::new(|| Die::numeric(20));
static D100: Lazy<Die> = Lazy::new(|| Die::numeric(100));
static COIN: Lazy<Die<char>> = Lazy::new(|| {
    Die::new(['H', 'T']).expect("coin faces are distinct")
});

pub fn d4() -> Die {
    D4.clone()
}

pub fn d6() -> Die {
    D6.clone()
}

pub fn d8() -> Die {
    D8.clone()
}

pub fn d10() -> Die {
    D10.clone()
}

pub fn d12() -> Die {
    D12.clone()
}

pub fn d20() -> Die {
    D20.clone()
}

pub fn d100() -> Die {
    D100.clone()
}

pub fn coin() -> Die<char> {
    COIN.clone()
}
