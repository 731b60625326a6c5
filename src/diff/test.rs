use std::collections::HashSet;
use crate::matrix::{Flow, Matrix, Protocol};
use super::{diff, report, Mark, EPHEMERAL};

fn flow(role: &str, port: u16, service: &str) -> Flow {
    Flow {
        protocol:  Protocol::TCP,
        port:      port,
        service:   service.to_owned(),
        node_role: role.to_owned(),
        ..Default::default()
    }
}

fn marks(a: &Matrix, b: &Matrix) -> Vec<(Mark, u16)> {
    diff(a, b).into_iter().map(|e| (e.mark, e.flow.port)).collect()
}

#[test]
fn scenario() {
    let a = Matrix::new(vec![flow("master", 22, ""), flow("master", 6443, "")]);
    let b = Matrix::new(vec![flow("master", 22, ""), flow("master", 9999, "")]);

    assert_eq!(vec![
        (Mark::Same,    22),
        (Mark::Added,   6443),
        (Mark::Removed, 9999),
    ], marks(&a, &b));

    let out = report(&a, &b);
    assert_eq!(vec![
        "Direction,Protocol,Port,Namespace,Service,Pod,Container,Node Role,Optional",
        "Ingress,TCP,22,,,,,master,false",
        "+ Ingress,TCP,6443,,,,,master,false",
        "- Ingress,TCP,9999,,,,,master,false",
    ], out.lines().collect::<Vec<_>>());
}

#[test]
fn unmarked_is_intersection() {
    let a = Matrix::new(vec![
        flow("master", 1, ""), flow("master", 2, ""), flow("worker", 2, ""), flow("worker", 3, ""),
    ]);
    let b = Matrix::new(vec![
        flow("worker", 2, ""), flow("master", 1, ""), flow("master", 4, ""), flow("worker", 1, ""),
    ]);

    let entries = diff(&a, &b);
    assert_eq!(a.combine(&b).len(), entries.len());

    let same = entries.iter().filter(|e| e.mark == Mark::Same).map(|e| {
        (e.flow.node_role.clone(), e.flow.port)
    }).collect::<HashSet<_>>();

    let both = a.iter().filter(|f| b.contains(f)).map(|f| {
        (f.node_role.clone(), f.port)
    }).collect::<HashSet<_>>();

    assert_eq!(both, same);

    for e in &entries {
        match e.mark {
            Mark::Added   => assert!(a.contains(&e.flow) && !b.contains(&e.flow)),
            Mark::Removed => assert!(!a.contains(&e.flow) && b.contains(&e.flow)),
            Mark::Same    => assert!(a.contains(&e.flow) && b.contains(&e.flow)),
        }
    }
}

#[test]
fn ephemeral_removed_is_suppressed() {
    let a = Matrix::new(vec![flow("master", 22, "")]);
    let b = Matrix::new(vec![flow("master", 22, ""), flow("master", 40123, EPHEMERAL)]);

    assert_eq!(vec![(Mark::Same, 22)], marks(&a, &b));
    assert!(!report(&a, &b).contains("40123"));
}

#[test]
fn ephemeral_in_both_is_kept() {
    let a = Matrix::new(vec![flow("master", 40123, EPHEMERAL)]);
    let b = Matrix::new(vec![flow("master", 40123, EPHEMERAL)]);
    assert_eq!(vec![(Mark::Same, 40123)], marks(&a, &b));
}

#[test]
fn ephemeral_added_is_marked() {
    let a = Matrix::new(vec![flow("master", 40123, EPHEMERAL)]);
    let b = Matrix::default();
    assert_eq!(vec![(Mark::Added, 40123)], marks(&a, &b));
}

#[test]
fn inputs_untouched() {
    let a = Matrix::new(vec![flow("worker", 80, "a"), flow("master", 80, "a")]);
    let b = Matrix::new(vec![flow("master", 80, "b")]);
    let (a0, b0) = (a.clone(), b.clone());

    report(&a, &b);

    assert_eq!(a0, a);
    assert_eq!(b0, b);
}
