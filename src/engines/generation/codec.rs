/// Fixed-point decimal gene encoding
///
/// A candidate's genome is ten signed decimal digits, two blocks of five:
///
/// ```text
/// [sign][d][d][d][d][sign][d][d][d][d]
/// [        x       ][        y       ]
/// ```
///
/// Each block stores one real value as a sign (`-1` or `+1`) followed by four
/// magnitude digits, most significant first. The magnitude is the value in
/// thousandths, so a block covers [-9.999, 9.999] at 0.001 resolution:
///
/// ```text
/// -1.034  ->  [-1][1][0][3][4]
///  0.5    ->  [ 1][0][5][0][0]
/// ```
///
/// Encoding truncates toward zero; anything below 0.001 is dropped silently.
///
/// # Why digits instead of floats?
///
/// Crossover works on whole digits, so swapping or interleaving blocks from two
/// parents always yields a value the codec can decode, and a single-gene
/// mutation moves the value by a bounded, predictable amount.
pub type Genes = [i8; GENE_COUNT];

/// Digits per encoded value (sign + 4 magnitude digits).
pub const BLOCK_LEN: usize = 5;
pub const GENE_COUNT: usize = 2 * BLOCK_LEN;

/// Index of the first gene of the x block and the y block.
pub const X_BLOCK: usize = 0;
pub const Y_BLOCK: usize = BLOCK_LEN;

/// Largest magnitude a block can hold.
pub const MAX_MAGNITUDE: f64 = 9.999;

const SCALE: f64 = 1000.0;

/// Scaled values are snapped to a millionth of a thousandth before truncating,
/// so `0.029 * 1000 = 28.999...` still encodes as 29.
const SNAP: f64 = 1e6;

pub fn is_sign_position(index: usize) -> bool {
    index % BLOCK_LEN == 0
}

/// Encode a single value into a sign-magnitude block.
///
/// Magnitudes above [`MAX_MAGNITUDE`] keep only their four lowest digits, so
/// 12.5 encodes as 2.5. Infinities saturate before wrapping; NaN encodes as 0.
pub fn encode_block(value: f64) -> [i8; BLOCK_LEN] {
    let scaled = value * SCALE;
    let snapped = (scaled * SNAP).round() / SNAP;
    let thousandths = snapped.trunc() as i64;

    let mut block = [0i8; BLOCK_LEN];
    block[0] = if thousandths < 0 { -1 } else { 1 };

    let mut magnitude = thousandths.unsigned_abs();
    for i in 0..BLOCK_LEN - 1 {
        block[BLOCK_LEN - 1 - i] = (magnitude % 10) as i8;
        magnitude /= 10;
    }
    block
}

/// Decode a sign-magnitude block back into a value.
pub fn decode_block(block: &[i8]) -> f64 {
    let thousandths = block[1..BLOCK_LEN]
        .iter()
        .fold(0i64, |acc, &digit| acc * 10 + i64::from(digit));
    let sign = if block[0] < 0 { -1.0 } else { 1.0 };
    sign * thousandths as f64 / SCALE
}

pub fn encode(x: f64, y: f64) -> Genes {
    let mut genes = [0i8; GENE_COUNT];
    genes[X_BLOCK..X_BLOCK + BLOCK_LEN].copy_from_slice(&encode_block(x));
    genes[Y_BLOCK..Y_BLOCK + BLOCK_LEN].copy_from_slice(&encode_block(y));
    genes
}

pub fn decode(genes: &Genes) -> (f64, f64) {
    (
        decode_block(&genes[X_BLOCK..X_BLOCK + BLOCK_LEN]),
        decode_block(&genes[Y_BLOCK..Y_BLOCK + BLOCK_LEN]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn truncate3(v: f64) -> f64 {
        (v * SCALE).trunc() / SCALE
    }

    #[test]
    fn test_encode_layout() {
        assert_eq!(encode_block(-1.034), [-1, 1, 0, 3, 4]);
        assert_eq!(encode_block(0.5), [1, 0, 5, 0, 0]);
        assert_eq!(encode_block(9.999), [1, 9, 9, 9, 9]);
        assert_eq!(encode_block(0.0), [1, 0, 0, 0, 0]);

        let genes = encode(2.25, -0.007);
        assert_eq!(genes, [1, 2, 2, 5, 0, -1, 0, 0, 0, 7]);
    }

    #[test]
    fn test_encode_truncates_toward_zero() {
        assert_eq!(encode_block(1.2349), [1, 1, 2, 3, 4]);
        assert_eq!(encode_block(-1.2349), [-1, 1, 2, 3, 4]);
        // Below resolution collapses to a positive zero
        assert_eq!(encode_block(-0.0004), [1, 0, 0, 0, 0]);
    }

    #[test]
    fn test_out_of_range_values_wrap() {
        assert_eq!(encode_block(12.5), [1, 2, 5, 0, 0]);
        assert_eq!(encode_block(-31.4159), [-1, 1, 4, 1, 5]);

        // Saturates at i64::MIN / i64::MAX, whose lowest digits are 5808 / 5807
        assert_eq!(encode_block(-1e19), [-1, 5, 8, 0, 8]);
        assert_eq!(encode_block(f64::NEG_INFINITY), [-1, 5, 8, 0, 8]);
        assert_eq!(encode_block(f64::INFINITY), [1, 5, 8, 0, 7]);
        assert_eq!(encode_block(f64::NAN), [1, 0, 0, 0, 0]);
    }

    #[test]
    fn test_round_trip_on_grid() {
        for thousandths in -9999i64..=9999 {
            let v = thousandths as f64 / SCALE;
            let (x, y) = decode(&encode(v, -v));
            assert_eq!(x, v, "x round trip failed for {}", v);
            assert_eq!(y, -v, "y round trip failed for {}", -v);
        }
    }

    #[test]
    fn test_round_trip_is_idempotent_off_grid() {
        for &v in &[3.14159, -2.71828, 0.00099, -9.9999, 4.5005] {
            let once = decode_block(&encode_block(v));
            let twice = decode_block(&encode_block(once));
            assert_eq!(once, truncate3(v));
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_sign_positions() {
        let signs: Vec<usize> = (0..GENE_COUNT).filter(|&i| is_sign_position(i)).collect();
        assert_eq!(signs, vec![X_BLOCK, Y_BLOCK]);
    }
}
