use thiserror::Error;

const BASE58_ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid base58 character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },
}

pub struct Base58Codec;

impl Base58Codec {
    pub fn decode<T>(&self, input: T) -> Result<Vec<u8>, DecodeError>
    where
        T: AsRef<[u8]>,
    {
        let bytes = input.as_ref();

        // Count leading '1's (zero digit)
        let leading_zeros = bytes.iter().take_while(|&&c| c == b'1').count();

        let mut num = Vec::new(); // big-endian big integer

        for (position, &c) in bytes.iter().enumerate().skip(leading_zeros) {
            let value = match BASE58_ALPHABET.iter().position(|&x| x == c) {
                Some(i) => i as u32,
                None => {
                    return Err(DecodeError::InvalidCharacter {
                        character: c as char,
                        position,
                    });
                }
            };

            let mut carry = value;
            let mut new_num = Vec::with_capacity(num.len() + 1);

            // Multiply big-int by 58 and add carry
            for &digit in num.iter().rev() {
                let acc = digit as u32 * 58 + carry;
                new_num.push((acc & 0xFF) as u8);
                carry = acc >> 8;
            }

            while carry > 0 {
                new_num.push((carry & 0xFF) as u8);
                carry >>= 8;
            }

            // Convert little-endian → big-endian
            new_num.reverse();
            num = new_num;
        }

        // Prepend one zero byte per leading '1' in the input
        let mut result = vec![0u8; leading_zeros];
        result.extend(num);

        // A zero value with no leading '1's still decodes to one zero byte.
        // When the input is all '1's the padding already covers the value,
        // so "111" is three zero bytes, not four.
        if result.is_empty() {
            result.push(0);
        }

        Ok(result)
    }
}
