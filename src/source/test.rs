use std::fs;
use anyhow::Result;
use crate::Error;
use crate::matrix::{Matrix, MASTER, WORKER};
use super::{load, statics, Deployment, Env};

#[test]
fn parse_env_and_deployment() -> Result<()> {
    assert_eq!(Env::Baremetal,  "baremetal".parse::<Env>()?);
    assert_eq!(Env::Cloud,      "cloud".parse::<Env>()?);
    assert_eq!(Deployment::SNO, "sno".parse::<Deployment>()?);
    assert_eq!(Deployment::MNO, "mno".parse::<Deployment>()?);

    assert!(matches!("aws".parse::<Env>(),       Err(Error::Validation { .. })));
    assert!(matches!("ha".parse::<Deployment>(), Err(Error::Validation { .. })));

    Ok(())
}

#[test]
fn statics_by_deployment() -> Result<()> {
    for env in &[Env::Baremetal, Env::Cloud] {
        let sno = statics(*env, Deployment::SNO)?;
        let mno = statics(*env, Deployment::MNO)?;

        assert!(!sno.is_empty());
        assert!(sno.iter().all(|f| f.node_role == MASTER));
        assert!(mno.iter().any(|f| f.node_role == WORKER));
        assert!(mno.len() > sno.len());
    }

    let sno = Matrix::new(statics(Env::Baremetal, Deployment::SNO)?);
    assert!(sno.iter().any(|f| f.port == 6443));

    Ok(())
}

#[test]
fn load_custom_entries() -> Result<()> {
    let dir  = tempfile::tempdir()?;
    let path = dir.path().join("custom.json");
    fs::write(&path, r#"[
        {
            "direction": "Ingress",
            "protocol": "UDP",
            "port": 4789,
            "namespace": "",
            "service": "vxlan",
            "pod": "",
            "container": "",
            "nodeRole": "worker",
            "optional": true
        }
    ]"#)?;

    let flows = load(&path)?;
    assert_eq!(1, flows.len());
    assert_eq!(4789, flows[0].port);
    assert_eq!("UDP", flows[0].protocol.as_str());
    assert!(flows[0].optional);

    Ok(())
}

#[test]
fn load_rejects_malformed() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let bad = dir.path().join("bad.json");
    fs::write(&bad, "[{")?;

    let mistyped = dir.path().join("mistyped.json");
    fs::write(&mistyped, r#"[{"direction": "Ingress", "protocol": "TCP", "port": "22"}]"#)?;

    let missing = dir.path().join("missing.json");

    for path in &[bad, mistyped, missing] {
        match load(path) {
            Err(Error::MalformedInput { path: p, .. }) => assert_eq!(path, &p),
            other                                      => panic!("unexpected {:?}", other),
        }
    }

    Ok(())
}
