use tag_cloud_core::prelude::*;

#[test]
fn first_rectangle_is_the_raw_spiral_point() {
    let mut layouter = CircularCloudLayouter::new(Point::new(500, 500), 10);
    assert_eq!(layouter.center(), Point::new(500, 500));
    let r = layouter
        .put_next_rectangle(Size::new(50, 50))
        .expect("valid size");
    assert_eq!(r, Rect::new(500, 500, 50, 50));
}

#[test]
fn center_never_changes() {
    let mut layouter = CircularCloudLayouter::new(Point::new(-7, 13), 3);
    for i in 1..20 {
        layouter
            .put_next_rectangle(Size::new(i, 21 - i))
            .expect("valid size");
        assert_eq!(layouter.center(), Point::new(-7, 13));
    }
}

#[test]
fn small_sequence_matches_known_layout() {
    let mut layouter = CircularCloudLayouter::new(Point::new(500, 500), 10);
    let got: Vec<Rect> = [(50, 50), (20, 20), (30, 10), (40, 40)]
        .into_iter()
        .map(|(w, h)| {
            layouter
                .put_next_rectangle(Size::new(w, h))
                .expect("valid size")
        })
        .collect();
    assert_eq!(
        got,
        vec![
            Rect::new(500, 500, 50, 50),
            // pulled up against the top edge of the first one
            Rect::new(500, 480, 20, 20),
            Rect::new(520, 490, 30, 10),
            Rect::new(460, 500, 40, 40),
        ]
    );
}

#[test]
fn squares_around_origin_stack_tightly() {
    let mut layouter = CircularCloudLayouter::new(Point::new(0, 0), 10);
    let got: Vec<Rect> = (0..3)
        .map(|_| {
            layouter
                .put_next_rectangle(Size::new(10, 10))
                .expect("valid size")
        })
        .collect();
    assert_eq!(
        got,
        vec![
            Rect::new(0, 0, 10, 10),
            Rect::new(0, 10, 10, 10),
            Rect::new(-1, -10, 10, 10),
        ]
    );
}

#[test]
fn works_through_the_trait_object() {
    let mut layouter: Box<dyn CloudLayouter> =
        Box::new(CircularCloudLayouter::new(Point::new(10, 10), 10));
    let r = layouter
        .put_next_rectangle(Size::new(4, 4))
        .expect("valid size");
    assert_eq!(r, Rect::new(10, 10, 4, 4));
    assert_eq!(layouter.center(), Point::new(10, 10));
}
