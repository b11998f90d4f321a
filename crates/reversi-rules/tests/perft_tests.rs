use reversi_rules::perft::perft_root;

#[test]
fn test_perft() {
    let nodes = perft_root(8, 6).unwrap();
    assert_eq!(nodes, 8_200);
}

#[test]
fn test_perft_smaller_grids_are_symmetric() {
    for n in [4, 6] {
        let nodes = perft_root(n, 1).unwrap();
        assert_eq!(nodes, 4, "opening moves on {n}x{n}");
    }
}

#[test]
fn test_perft_6x6() {
    assert_eq!(perft_root(6, 5).unwrap(), 1_364);
    assert_eq!(perft_root(6, 6).unwrap(), 7_604);
}
