extern crate test;
use super::*;
use crate::generate::SequenceGenerator;
use test::Bencher;

const LEN: usize = 1_000;

fn sequences() -> (Vec<u8>, Vec<u8>) {
    let mut generator = SequenceGenerator::dna(7);
    (generator.sequence(LEN), generator.sequence(LEN))
}

#[bench]
fn hirschberg_align_1k(b: &mut Bencher) {
    let (x, y) = sequences();
    b.iter(|| hirschberg_align(&x, &y, &LinearScoring::DEFAULT));
}

#[bench]
fn nw_align_1k(b: &mut Bencher) {
    let (x, y) = sequences();
    b.iter(|| nw_align(&x, &y, &LinearScoring::DEFAULT));
}

#[bench]
fn nw_score_row_1k(b: &mut Bencher) {
    let (x, y) = sequences();
    b.iter(|| nw_score_row(&x, &y, &LinearScoring::DEFAULT));
}
