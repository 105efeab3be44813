//! Group code value types
//!
//! The numeric range a group code falls in fixes the type of the value that
//! follows it. The reader never applies this; it is consulted by consumers
//! such as the header parser that have no field table of their own.

/// Declared type of the value following a group code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupCodeValueType {
    String,
    Double,
    Int16,
    Int32,
    Int64,
    Bool,
    Handle,
    Binary,
    Comment,
    Unknown,
}

impl GroupCodeValueType {
    /// Classify a group code by its range
    pub fn from_code(code: i16) -> Self {
        use GroupCodeValueType::*;
        match code {
            0..=9 => String,
            10..=59 => Double,
            60..=79 => Int16,
            90..=99 => Int32,
            100..=102 => String,
            105 => Handle,
            110..=149 => Double,
            160..=169 => Int64,
            170..=179 => Int16,
            210..=239 => Double,
            270..=289 => Int16,
            290..=299 => Bool,
            300..=309 => String,
            310..=319 => Binary,
            320..=369 => Handle,
            370..=389 => Int16,
            390..=399 => Handle,
            400..=409 => Int16,
            410..=419 => String,
            420..=429 => Int32,
            430..=439 => String,
            440..=459 => Int32,
            460..=469 => Double,
            470..=479 => String,
            480..=481 => Handle,
            999 => Comment,
            1000..=1009 => String,
            1010..=1059 => Double,
            1060..=1070 => Int16,
            1071 => Int32,
            _ => Unknown,
        }
    }

    /// Codes 10-39 hold the X, Y and Z of up to ten points
    pub fn coordinate_axis(code: i16) -> Option<usize> {
        match code {
            10..=19 => Some(0),
            20..=29 => Some(1),
            30..=39 => Some(2),
            _ => None,
        }
    }

    /// Whether values of this type parse as integers
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            GroupCodeValueType::Int16 | GroupCodeValueType::Int32 | GroupCodeValueType::Int64
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges() {
        assert_eq!(GroupCodeValueType::from_code(0), GroupCodeValueType::String);
        assert_eq!(GroupCodeValueType::from_code(10), GroupCodeValueType::Double);
        assert_eq!(GroupCodeValueType::from_code(62), GroupCodeValueType::Int16);
        assert_eq!(GroupCodeValueType::from_code(91), GroupCodeValueType::Int32);
        assert_eq!(GroupCodeValueType::from_code(290), GroupCodeValueType::Bool);
        assert_eq!(GroupCodeValueType::from_code(330), GroupCodeValueType::Handle);
        assert_eq!(GroupCodeValueType::from_code(999), GroupCodeValueType::Comment);
        assert_eq!(GroupCodeValueType::from_code(85), GroupCodeValueType::Unknown);
    }

    #[test]
    fn test_coordinate_axis() {
        assert_eq!(GroupCodeValueType::coordinate_axis(10), Some(0));
        assert_eq!(GroupCodeValueType::coordinate_axis(21), Some(1));
        assert_eq!(GroupCodeValueType::coordinate_axis(38), Some(2));
        assert_eq!(GroupCodeValueType::coordinate_axis(40), None);
    }
}
