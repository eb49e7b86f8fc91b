//! Component type tags shared by every client of the partitioning protocol.
//!
//! The byte values are fixed by the service. Only the JSON scalar tags are
//! written by this crate.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BytePrefix {
    Undefined = 0x00,
    Null = 0x01,
    False = 0x02,
    True = 0x03,
    MinNumber = 0x04,
    Number = 0x05,
    MaxNumber = 0x06,
    MinString = 0x07,
    String = 0x08,
    MaxString = 0x09,
    Int64 = 0x0A,
    Int32 = 0x0B,
    Int16 = 0x0C,
    Int8 = 0x0D,
    Uint64 = 0x0E,
    Uint32 = 0x0F,
    Uint16 = 0x10,
    Uint8 = 0x11,
    Binary = 0x12,
    Guid = 0x13,
    Float = 0x14,
    Infinity = 0xFF,
}

impl BytePrefix {
    pub fn byte(self) -> u8 {
        self as u8
    }

    pub fn for_bool(value: bool) -> Self {
        if value {
            BytePrefix::True
        } else {
            BytePrefix::False
        }
    }
}
