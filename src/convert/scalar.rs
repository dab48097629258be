use bstr::{BString, ByteSlice};

use crate::convert::Convert;
use crate::error::{Error, ErrorKind};
use crate::node::Node;

impl Convert for String {
    #[inline]
    fn encode(&self) -> Node {
        Node::Scalar(BString::from(self.as_bytes()))
    }

    fn decode(node: &Node, out: &mut Self) -> Result<(), Error> {
        let Some(payload) = node.as_scalar() else {
            return Err(ErrorKind::ExpectedScalar.into());
        };

        let text = payload
            .to_str()
            .map_err(|_| Error::new(ErrorKind::InvalidUtf8))?;

        *out = text.to_owned();
        Ok(())
    }
}

impl Convert for bool {
    #[inline]
    fn encode(&self) -> Node {
        Node::scalar(if *self { "true" } else { "false" })
    }

    fn decode(node: &Node, out: &mut Self) -> Result<(), Error> {
        const TRUE: &[u8] = b"true";
        const FALSE: &[u8] = b"false";

        let Some(payload) = node.as_scalar() else {
            return Err(ErrorKind::ExpectedScalar.into());
        };

        *out = match payload.as_bytes() {
            TRUE => true,
            FALSE => false,
            _ => return Err(ErrorKind::InvalidBoolean.into()),
        };

        Ok(())
    }
}

macro_rules! int_convert {
    ($ty:ty) => {
        impl Convert for $ty {
            #[inline]
            fn encode(&self) -> Node {
                let mut buffer = itoa::Buffer::new();
                Node::scalar(buffer.format(*self))
            }

            fn decode(node: &Node, out: &mut Self) -> Result<(), Error> {
                let Some(payload) = node.as_scalar() else {
                    return Err(ErrorKind::ExpectedScalar.into());
                };

                *out = lexical_core::parse(payload)
                    .map_err(|_| Error::new(ErrorKind::InvalidNumber))?;
                Ok(())
            }
        }
    };
}

macro_rules! float_convert {
    ($ty:ty) => {
        impl Convert for $ty {
            #[inline]
            fn encode(&self) -> Node {
                let mut buffer = ryu::Buffer::new();
                Node::scalar(buffer.format(*self))
            }

            fn decode(node: &Node, out: &mut Self) -> Result<(), Error> {
                let Some(payload) = node.as_scalar() else {
                    return Err(ErrorKind::ExpectedScalar.into());
                };

                *out = lexical_core::parse(payload)
                    .map_err(|_| Error::new(ErrorKind::InvalidNumber))?;
                Ok(())
            }
        }
    };
}

int_convert!(u8);
int_convert!(i8);
int_convert!(u16);
int_convert!(i16);
int_convert!(u32);
int_convert!(i32);
int_convert!(u64);
int_convert!(i64);
int_convert!(u128);
int_convert!(i128);
float_convert!(f32);
float_convert!(f64);
