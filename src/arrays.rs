use std::ops::Deref;

/// An NBT byte array. Wire form is a 32-bit element count followed by the
/// raw bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct ByteArray {
    data: Vec<i8>,
}

impl ByteArray {
    pub fn new(data: Vec<i8>) -> Self {
        Self { data }
    }

    pub fn into_inner(self) -> Vec<i8> {
        self.data
    }
}

impl Deref for ByteArray {
    type Target = Vec<i8>;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl From<Vec<i8>> for ByteArray {
    fn from(data: Vec<i8>) -> Self {
        Self::new(data)
    }
}

/// An NBT int array. Wire form is a 32-bit element count followed by that
/// many big-endian 32-bit integers.
#[derive(Debug, Clone, PartialEq)]
pub struct IntArray {
    data: Vec<i32>,
}

impl IntArray {
    pub fn new(data: Vec<i32>) -> Self {
        Self { data }
    }

    pub fn into_inner(self) -> Vec<i32> {
        self.data
    }
}

impl Deref for IntArray {
    type Target = Vec<i32>;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl From<Vec<i32>> for IntArray {
    fn from(data: Vec<i32>) -> Self {
        Self::new(data)
    }
}
