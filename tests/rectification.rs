#![allow(non_snake_case)]

use conicprep::{algebra::*, cones::*, Settings, Workspace};

#[test]
fn test_second_order_block_scaled_uniformly() {
    // rows of wildly different magnitude, all inside one second-order
    // cone block
    let P = CscMatrix::<f64>::spalloc(3, 3, 0);
    let A = CscMatrix::new(
        3,
        3,
        vec![0, 1, 2, 3],
        vec![0, 1, 2],
        vec![2., 100., 0.01], //
    );
    let q = vec![1., 1., 1.];
    let b = vec![1., 1., 1.];

    let mut ws = Workspace::new(
        &P,
        &q,
        &A,
        &b,
        &[ConeSpec::SecondOrder(3)],
        Settings::default(),
    )
    .unwrap();
    ws.equilibrate();

    // every entry of the block's constraint scaling is the same value
    let e = &ws.data.equilibration.e;
    assert!((e[0] - e[1]).abs() <= 4.0 * f64::EPSILON * e[0]);
    assert!((e[0] - e[2]).abs() <= 4.0 * f64::EPSILON * e[0]);

    // rectifying again from this state changes nothing further
    let mut δ = vec![0.0; 3];
    assert!(!ws.cones.rectify_equilibration(&mut δ, e));
    assert_eq!(δ, vec![1.; 3]);
}

#[test]
fn test_mixed_cones_rectify_only_uniform_blocks() {
    let P = CscMatrix::<f64>::spalloc(3, 3, 0);
    let A = CscMatrix::new(
        3,
        3,
        vec![0, 1, 2, 3],
        vec![0, 1, 2],
        vec![5., 100., 0.01], //
    );
    let q = vec![1., 1., 1.];
    let b = vec![1., 1., 1.];

    let mut ws = Workspace::new(
        &P,
        &q,
        &A,
        &b,
        &[ConeSpec::Zero(1), ConeSpec::SecondOrder(2)],
        Settings::default(),
    )
    .unwrap();
    ws.equilibrate();

    let e = &ws.data.equilibration.e;

    //second order block is uniform
    assert!((e[1] - e[2]).abs() <= 4.0 * f64::EPSILON * e[1]);

    //zero cone row keeps its own elementwise scaling, which for this
    //data differs from the rectified block value
    assert!((e[0] - e[1]).abs() > 1e-6);
}

#[test]
fn test_elementwise_blocks_left_alone() {
    // with only elementwise-scalable cones, rectification reports no
    // change and triggers no extra rescaling pass
    let P = CscMatrix::<f64>::spalloc(2, 2, 0);
    let A = CscMatrix::new(2, 2, vec![0, 1, 2], vec![0, 1], vec![100., 0.01]);
    let q = vec![1., 1.];
    let b = vec![1., 1.];

    let mut ws = Workspace::new(
        &P,
        &q,
        &A,
        &b,
        &[ConeSpec::Zero(1), ConeSpec::Nonnegative(1)],
        Settings::default(),
    )
    .unwrap();
    ws.equilibrate();

    let e = ws.data.equilibration.e.clone();

    let mut δ = vec![0.0; 2];
    assert!(!ws.cones.rectify_equilibration(&mut δ, &e));
    assert_eq!(δ, vec![1.; 2]);

    //einv reflects e exactly
    let mut einv = e;
    einv.recip();
    assert_eq!(ws.data.equilibration.einv, einv);
}
