//! Checks the conversions of a format against its [FormatTestCase] values.
use log::debug;

use crate::{
    channel::float_to_ubyte,
    fixtures::FormatTestCase,
    lookup, read_8unorm, read_float, s3tc, write_8unorm, write_float, Colorspace,
    FormatDescription, Layout, Rect,
};

const EPSILON: f64 = 1e-6;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Outcome {
    Passed,
    /// The format can't be converted in this environment.
    Skipped,
    /// Descriptions of each mismatch.
    Failed(Vec<String>),
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct Summary {
    pub passed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.passed + self.skipped + self.failed
    }
}

/// Runs every case and calls `report` with the outcome of each case.
pub fn run_all<'a>(
    cases: impl IntoIterator<Item = &'a FormatTestCase>,
    mut report: impl FnMut(&FormatTestCase, &Outcome),
) -> Summary {
    let mut summary = Summary::default();
    for case in cases {
        let outcome = run_test_case(case);
        match outcome {
            Outcome::Passed => summary.passed += 1,
            Outcome::Skipped => summary.skipped += 1,
            Outcome::Failed(_) => summary.failed += 1,
        }
        report(case, &outcome);
    }
    summary
}

/// Fetches, unpacks and packs the block of `case` at both precisions.
pub fn run_test_case(case: &FormatTestCase) -> Outcome {
    let desc = lookup(case.format);
    if desc.layout == Layout::BlockCompressed && !s3tc::is_available() {
        debug!("Skipping {} without a DXTn library", desc.name);
        return Outcome::Skipped;
    }

    let mut errors = Vec::new();
    check_fetch(desc, case, &mut errors);
    check_float(desc, case, &mut errors);
    check_8unorm(desc, case, &mut errors);
    if desc.colorspace == Colorspace::Zs {
        check_depth_stencil(desc, case, &mut errors);
    }

    if errors.is_empty() {
        Outcome::Passed
    } else {
        Outcome::Failed(errors)
    }
}

struct Block<'a> {
    width: usize,
    height: usize,
    bytes: usize,
    packed: &'a [u8],
    mask: &'a [u8],
}

impl<'a> Block<'a> {
    fn new(desc: &FormatDescription, case: &'a FormatTestCase) -> Self {
        let bytes = desc.bytes_per_block();
        Self {
            width: desc.block.width as usize,
            height: desc.block.height as usize,
            bytes,
            packed: &case.packed[..bytes],
            mask: &case.mask[..bytes],
        }
    }

    fn rect(&self) -> Rect {
        Rect::new(0, 0, self.width as u32, self.height as u32)
    }

    fn texels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| (x, y)))
    }

    fn matches(&self, packed: &[u8]) -> bool {
        packed
            .iter()
            .zip(self.packed)
            .zip(self.mask)
            .all(|((a, b), m)| a & m == b & m)
    }
}

fn float_matches(actual: &[f32], expected: &[f64; 4]) -> bool {
    actual
        .iter()
        .zip(expected)
        .all(|(a, e)| (*a as f64 - e).abs() <= EPSILON * e.abs().max(1.0))
}

fn expected_8unorm(expected: &[f64; 4]) -> [u8; 4] {
    expected.map(|v| float_to_ubyte(v as f32))
}

fn check_fetch(desc: &FormatDescription, case: &FormatTestCase, errors: &mut Vec<String>) {
    let block = Block::new(desc, case);
    for (x, y) in block.texels() {
        let expected = case.expected(x, y);
        match desc.fetch_rgba_float(block.packed, x as u32, y as u32) {
            Ok(rgba) if float_matches(&rgba, &expected) => (),
            Ok(rgba) => errors.push(format!(
                "fetch_rgba_float ({x}, {y}) returned {rgba:?} instead of {expected:?}"
            )),
            Err(e) => errors.push(format!("fetch_rgba_float failed: {e}")),
        }

        let expected = expected_8unorm(&expected);
        match desc.fetch_rgba_8unorm(block.packed, x as u32, y as u32) {
            Ok(rgba) if rgba == expected => (),
            Ok(rgba) => errors.push(format!(
                "fetch_rgba_8unorm ({x}, {y}) returned {rgba:?} instead of {expected:?}"
            )),
            Err(e) => errors.push(format!("fetch_rgba_8unorm failed: {e}")),
        }
    }
}

fn check_float(desc: &FormatDescription, case: &FormatTestCase, errors: &mut Vec<String>) {
    let block = Block::new(desc, case);
    let stride = block.width * 4;

    let mut unpacked = vec![0.0f32; block.height * stride];
    match read_float(desc.format, &mut unpacked, stride, block.packed, block.bytes, block.rect()) {
        Ok(()) => {
            for (x, y) in block.texels() {
                let rgba = &unpacked[y * stride + x * 4..][..4];
                let expected = case.expected(x, y);
                if !float_matches(rgba, &expected) {
                    errors.push(format!(
                        "read_float ({x}, {y}) returned {rgba:?} instead of {expected:?}"
                    ));
                }
            }
        }
        Err(e) => errors.push(format!("read_float failed: {e}")),
    }

    let src: Vec<f32> = block
        .texels()
        .flat_map(|(x, y)| case.expected(x, y).map(|v| v as f32))
        .collect();
    let mut packed = vec![0u8; block.bytes];
    match write_float(desc.format, &mut packed, block.bytes, &src, stride, block.rect()) {
        Ok(_) if block.matches(&packed) => (),
        Ok(_) => errors.push(format!(
            "write_float returned {packed:02x?} instead of {:02x?}",
            block.packed
        )),
        Err(e) => errors.push(format!("write_float failed: {e}")),
    }
}

/// Packing from 8 bits is only lossless if every expected value is a multiple of 1/255.
fn packs_8unorm_exactly(block: &Block, case: &FormatTestCase) -> bool {
    block.texels().all(|(x, y)| {
        case.expected(x, y).iter().all(|v| {
            let scaled = v * 255.0;
            (0.0..=1.0).contains(v) && scaled == scaled.round()
        })
    })
}

fn check_8unorm(desc: &FormatDescription, case: &FormatTestCase, errors: &mut Vec<String>) {
    let block = Block::new(desc, case);
    let stride = block.width * 4;

    let mut unpacked = vec![0u8; block.height * stride];
    match read_8unorm(desc.format, &mut unpacked, stride, block.packed, block.bytes, block.rect()) {
        Ok(()) => {
            for (x, y) in block.texels() {
                let rgba = &unpacked[y * stride + x * 4..][..4];
                let expected = expected_8unorm(&case.expected(x, y));
                if rgba != expected {
                    errors.push(format!(
                        "read_8unorm ({x}, {y}) returned {rgba:?} instead of {expected:?}"
                    ));
                }
            }
        }
        Err(e) => errors.push(format!("read_8unorm failed: {e}")),
    }

    if !packs_8unorm_exactly(&block, case) {
        return;
    }

    let src: Vec<u8> = block
        .texels()
        .flat_map(|(x, y)| expected_8unorm(&case.expected(x, y)))
        .collect();
    let mut packed = vec![0u8; block.bytes];
    match write_8unorm(desc.format, &mut packed, block.bytes, &src, stride, block.rect()) {
        Ok(_) if block.matches(&packed) => (),
        Ok(_) => errors.push(format!(
            "write_8unorm returned {packed:02x?} instead of {:02x?}",
            block.packed
        )),
        Err(e) => errors.push(format!("write_8unorm failed: {e}")),
    }
}

/// Depth is the red channel and stencil is the green channel of the expected values.
fn check_depth_stencil(desc: &FormatDescription, case: &FormatTestCase, errors: &mut Vec<String>) {
    let block = Block::new(desc, case);
    let [z, s, _, _] = case.expected(0, 0);

    let mut packed = vec![0u8; block.bytes];
    if let Some(depth) = desc.depth() {
        let mut unpacked = [0.0f32];
        depth.unpack_z_float(&mut unpacked, 1, block.packed, block.bytes, 1, 1);
        if (unpacked[0] as f64 - z).abs() > EPSILON {
            errors.push(format!(
                "unpack_z_float returned {} instead of {z}",
                unpacked[0]
            ));
        }
        depth.pack_z_float(&mut packed, block.bytes, &[z as f32], 1, 1, 1);
    }

    if let Some(stencil) = desc.stencil() {
        let mut unpacked = [0u8];
        stencil.unpack_s_8uscaled(&mut unpacked, 1, block.packed, block.bytes, 1, 1);
        if unpacked[0] as f64 != s {
            errors.push(format!(
                "unpack_s_8uscaled returned {} instead of {s}",
                unpacked[0]
            ));
        }
        stencil.pack_s_8uscaled(&mut packed, block.bytes, &[s as u8], 1, 1, 1);
    }

    if !block.matches(&packed) {
        errors.push(format!(
            "pack_z_float and pack_s_8uscaled returned {packed:02x?} instead of {:02x?}",
            block.packed
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fixtures::TEST_CASES, Format};

    fn cases(format: Format) -> impl Iterator<Item = &'static FormatTestCase> {
        TEST_CASES.iter().filter(move |c| c.format == format)
    }

    #[test]
    fn bgra8_cases_pass() {
        crate::initialize();
        for case in cases(Format::B8G8R8A8Unorm) {
            assert_eq!(Outcome::Passed, run_test_case(case));
        }
    }

    #[test]
    fn z24s8_cases_pass() {
        crate::initialize();
        for case in cases(Format::Z24UnormS8Uscaled) {
            assert_eq!(Outcome::Passed, run_test_case(case));
        }
    }

    #[test]
    fn packs_8unorm_exactly_per_case() {
        let desc = lookup(Format::R8Snorm);
        let [zero, one, minus_one] = [0, 1, 2].map(|i| cases(Format::R8Snorm).nth(i).unwrap());
        assert!(packs_8unorm_exactly(&Block::new(desc, zero), zero));
        assert!(packs_8unorm_exactly(&Block::new(desc, one), one));
        assert!(!packs_8unorm_exactly(&Block::new(desc, minus_one), minus_one));

        let desc = lookup(Format::R8G8Sscaled);
        let case = cases(Format::R8G8Sscaled).nth(1).unwrap();
        assert!(!packs_8unorm_exactly(&Block::new(desc, case), case));
    }

    #[test]
    fn signed_and_scaled_cases_pass() {
        crate::initialize();
        for format in [Format::R8Snorm, Format::R8G8Sscaled, Format::R16Uscaled] {
            for case in cases(format) {
                assert_eq!(Outcome::Passed, run_test_case(case), "{format:?}");
            }
        }
    }

    #[test]
    fn wrong_value_fails() {
        crate::initialize();
        let mut case = *cases(Format::R8G8B8A8Unorm).nth(1).unwrap();
        case.unpacked[0][0] = [0.5, 0.0, 0.0, 0.0];
        match run_test_case(&case) {
            Outcome::Failed(errors) => assert!(!errors.is_empty()),
            outcome => panic!("unexpected {outcome:?}"),
        }
    }

    #[test]
    fn masked_bits_are_ignored() {
        crate::initialize();
        // The padding byte is set but masked out.
        let case = crate::fixtures::FormatTestCase {
            format: Format::B8G8R8X8Unorm,
            mask: [0xff, 0xff, 0xff, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            packed: [0, 0, 0, 0xff, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            unpacked: [[[0.0, 0.0, 0.0, 1.0]; 4]; 4],
        };
        assert_eq!(Outcome::Passed, run_test_case(&case));
    }

    #[test]
    fn compressed_cases_skip_without_library() {
        crate::initialize();
        let outcome = run_test_case(cases(Format::Dxt1Rgba).next().unwrap());
        if s3tc::is_available() {
            assert_eq!(Outcome::Passed, outcome);
        } else {
            assert_eq!(Outcome::Skipped, outcome);
        }
    }

    #[test]
    fn summary_counts() {
        crate::initialize();
        let mut reported = 0;
        let summary = run_all(cases(Format::L8Unorm), |_, _| reported += 1);
        assert_eq!(2, reported);
        assert_eq!(
            Summary {
                passed: 2,
                skipped: 0,
                failed: 0
            },
            summary
        );
        assert_eq!(2, summary.total());
    }
}
