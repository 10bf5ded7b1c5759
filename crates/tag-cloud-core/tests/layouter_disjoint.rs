use rand::{Rng, SeedableRng};
use tag_cloud_core::prelude::*;

fn disjoint(rects: &[Rect]) -> bool {
    for i in 0..rects.len() {
        for j in (i + 1)..rects.len() {
            // independent of Rect::intersects, widened so huge sizes cannot wrap
            let (a, b) = (&rects[i], &rects[j]);
            let span = |r: &Rect| {
                let (x, y) = (r.x as i64, r.y as i64);
                (x, y, x + r.w as i64, y + r.h as i64)
            };
            let (ax0, ay0, ax1, ay1) = span(a);
            let (bx0, by0, bx1, by1) = span(b);
            let separated = ax0 >= bx1 || bx0 >= ax1 || ay0 >= by1 || by0 >= ay1;
            if !separated {
                return false;
            }
        }
    }
    true
}

fn random_sizes(seed: u64, count: usize, min: i32, max: i32) -> Vec<Size> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Size::new(rng.gen_range(min..max), rng.gen_range(min..max)))
        .collect()
}

#[test]
fn hundred_random_rects_do_not_overlap() {
    let mut layouter = CircularCloudLayouter::new(Point::new(500, 500), 10);
    let mut rects = Vec::new();
    for size in random_sizes(10, 100, 5, 70) {
        rects.push(layouter.put_next_rectangle(size).expect("valid size"));
    }
    assert_eq!(rects.len(), 100);
    assert!(disjoint(&rects));
    assert_eq!(layouter.rectangles(), rects.as_slice());
}

#[test]
fn disjoint_across_seeds_centers_and_steps() {
    for (seed, center, step) in [
        (1, Point::new(0, 0), 1),
        (2, Point::new(-300, 120), 5),
        (3, Point::new(1000, 1000), 25),
    ] {
        let mut layouter = CircularCloudLayouter::new(center, step);
        for size in random_sizes(seed, 60, 1, 90) {
            layouter.put_next_rectangle(size).expect("valid size");
        }
        assert!(disjoint(layouter.rectangles()), "seed {seed}");
    }
}

#[test]
fn sizes_are_kept_as_requested() {
    let mut layouter = CircularCloudLayouter::new(Point::new(0, 0), 10);
    for size in random_sizes(7, 40, 5, 70) {
        let r = layouter.put_next_rectangle(size).expect("valid size");
        assert_eq!(r.size(), size);
    }
}

#[test]
fn placement_set_grows_by_one_per_success() {
    let mut layouter = CircularCloudLayouter::new(Point::new(50, 50), 10);
    let requests = [
        Size::new(10, 10),
        Size::new(0, 5),
        Size::new(12, 7),
        Size::new(-1, -1),
        Size::new(5, 30),
    ];
    let mut expected = 0;
    for size in requests {
        let before = layouter.len();
        match layouter.put_next_rectangle(size) {
            Ok(_) => expected += 1,
            Err(_) => assert_eq!(layouter.len(), before),
        }
        assert_eq!(layouter.len(), expected);
    }
    assert_eq!(layouter.len(), 3);
}

#[test]
fn maximal_sizes_are_placed_without_overlap() {
    let mut layouter = CircularCloudLayouter::new(Point::new(500, 500), 10);
    for size in [
        Size::new(i32::MAX, 10),
        Size::new(10, 10),
        Size::new(10, i32::MAX),
        Size::new(30, 20),
    ] {
        layouter.put_next_rectangle(size).expect("positive size");
    }
    assert_eq!(layouter.len(), 4);
    assert!(disjoint(layouter.rectangles()));
}
