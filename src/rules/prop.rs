//! SGF property keys

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

macro_rules! sgf_props {
    ($($name:ident),+ $(,)?) => {
        /// Every SGF FF[4] property key, plus a few older application keys.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum Prop {
            $($name),+
        }

        impl Prop {
            /// All known keys in alphabetical order.
            pub const ALL: &'static [Prop] = &[$(Prop::$name),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Prop::$name => stringify!($name)),+
                }
            }
        }

        impl FromStr for Prop {
            type Err = crate::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($name) => Ok(Prop::$name),)+
                    _ => Err(crate::Error::UnknownProperty { key: s.to_string() }),
                }
            }
        }
    };
}

sgf_props!(
    AB, AE, AN, AP, AR, AS, AW, B, BL, BM, BR, BS, BT, C, CA, CH, CP, CR, DD, DM, DO, DT, EL, EV,
    EX, FF, FG, GB, GC, GM, GN, GW, HA, HO, ID, IP, IT, IY, KM, KO, L, LB, LN, LT, M, MA, MN, MU,
    N, OB, OH, OM, ON, OP, OT, OV, OW, PB, PC, PL, PM, PW, RE, RG, RO, RU, SC, SE, SI, SL, SO, SQ,
    ST, SU, SZ, TB, TC, TE, TM, TR, TW, UC, US, V, VW, W, WL, WR, WS, WT,
);

impl Prop {
    /// Whether values of this property are SGF points (and so move under
    /// rotation and flips).
    pub fn is_point_valued(self) -> bool {
        matches!(
            self,
            Prop::CR
                | Prop::LB
                | Prop::MA
                | Prop::SQ
                | Prop::TR
                | Prop::B
                | Prop::W
                | Prop::AW
                | Prop::AB
                | Prop::AE
                | Prop::AR
                | Prop::DD
                | Prop::LN
                | Prop::TB
                | Prop::TW
        )
    }

    /// Mark properties shown on the board.
    pub fn marks() -> [Prop; 5] {
        [Prop::CR, Prop::LB, Prop::MA, Prop::SQ, Prop::TR]
    }
}

impl fmt::Display for Prop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
