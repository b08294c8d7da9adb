use pool_block_core::{render_pool, render_pool_text, PoolSpec, RenderError, StaticRoute};
use pretty_assertions::assert_eq;

fn base() -> PoolSpec {
    PoolSpec {
        network: "10.0.0.0".to_string(),
        mask: "255.255.255.0".to_string(),
        ..PoolSpec::default()
    }
}

fn route(mask: u8, network: &str, gateway: &str) -> StaticRoute {
    StaticRoute {
        mask,
        network: network.to_string(),
        gateway: gateway.to_string(),
    }
}

#[test]
fn minimal_parameters() {
    let lines = render_pool(&base()).expect("render");
    assert_eq!(
        lines,
        vec![
            "subnet 10.0.0.0 netmask 255.255.255.0 {",
            "  option subnet-mask 255.255.255.0;",
            "}",
        ]
    );
}

#[test]
fn failover_forces_pool_block_and_precedes_range() {
    let spec = PoolSpec {
        range: "10.0.0.10 - 10.0.0.50".into(),
        failover: Some("10.1.1.20".to_string()),
        ..base()
    };
    assert_eq!(
        render_pool_text(&spec).expect("render"),
        "\
subnet 10.0.0.0 netmask 255.255.255.0 {
  pool
  {
    failover peer \"10.1.1.20\";
    range 10.0.0.10 - 10.0.0.50;
  }
  option subnet-mask 255.255.255.0;
}"
    );
}

#[test]
fn failover_without_range_still_emits_pool_block() {
    let spec = PoolSpec {
        failover: Some("peer1".to_string()),
        ..base()
    };
    let lines = render_pool(&spec).expect("render");
    assert_eq!(
        lines,
        vec![
            "subnet 10.0.0.0 netmask 255.255.255.0 {",
            "  pool",
            "  {",
            "    failover peer \"peer1\";",
            "  }",
            "  option subnet-mask 255.255.255.0;",
            "}",
        ]
    );
}

#[test]
fn empty_string_range_behaves_like_no_range() {
    let spec = PoolSpec {
        range: "".into(),
        ..base()
    };
    assert_eq!(render_pool(&spec), render_pool(&base()));
}

#[test]
fn empty_range_list_behaves_like_no_range() {
    let spec = PoolSpec {
        range: Vec::<&str>::new().into(),
        ..base()
    };
    assert_eq!(render_pool(&spec), render_pool(&base()));
}

#[test]
fn range_array_emits_one_line_per_entry_in_order() {
    let spec = PoolSpec {
        range: vec!["10.0.0.10 - 10.0.0.50", "10.0.0.100 - 10.0.0.150"].into(),
        ..base()
    };
    assert_eq!(
        render_pool(&spec).expect("render"),
        vec![
            "subnet 10.0.0.0 netmask 255.255.255.0 {",
            "  pool",
            "  {",
            "    range 10.0.0.10 - 10.0.0.50;",
            "    range 10.0.0.100 - 10.0.0.150;",
            "  }",
            "  option subnet-mask 255.255.255.0;",
            "}",
        ]
    );
}

#[test]
fn search_domains_string_and_list_render_identically() {
    let as_string = PoolSpec {
        search_domains: "example.org, other.example.org".into(),
        ..base()
    };
    let as_list = PoolSpec {
        search_domains: vec!["example.org", "other.example.org"].into(),
        ..base()
    };
    let rendered = render_pool(&as_string).expect("render");
    assert_eq!(rendered, render_pool(&as_list).expect("render"));
    assert_eq!(
        rendered,
        vec![
            "subnet 10.0.0.0 netmask 255.255.255.0 {",
            "  option subnet-mask 255.255.255.0;",
            "  option domain-search \"example.org\", \"other.example.org\";",
            "}",
        ]
    );
}

#[test]
fn static_routes_emit_both_options_with_identical_payload() {
    let spec = PoolSpec {
        static_routes: vec![
            route(32, "128.128.128.128", "10.0.0.1"),
            route(25, "128.128.128.128", "10.0.0.2"),
            route(24, "128.128.128.0", "10.0.0.3"),
            route(17, "128.128.128.0", "10.0.0.4"),
            route(16, "128.128.0.0", "10.0.0.5"),
            route(9, "128.128.0.0", "10.0.0.6"),
            route(8, "128.0.0.0", "10.0.0.7"),
            route(1, "128.0.0.0", "10.0.0.8"),
            route(0, "0.0.0.0", "10.0.0.9"),
        ],
        ..base()
    };
    assert_eq!(
        render_pool(&spec).expect("render"),
        vec![
            "subnet 10.0.0.0 netmask 255.255.255.0 {",
            "  option subnet-mask 255.255.255.0;",
            "  option rfc3442-classless-static-routes",
            "    32, 128, 128, 128, 128, 10, 0, 0, 1,",
            "    25, 128, 128, 128, 128, 10, 0, 0, 2,",
            "    24, 128, 128, 128, 10, 0, 0, 3,",
            "    17, 128, 128, 128, 10, 0, 0, 4,",
            "    16, 128, 128, 10, 0, 0, 5,",
            "    9, 128, 128, 10, 0, 0, 6,",
            "    8, 128, 10, 0, 0, 7,",
            "    1, 128, 10, 0, 0, 8,",
            "    0, 10, 0, 0, 9;",
            "  option ms-classless-static-routes",
            "    32, 128, 128, 128, 128, 10, 0, 0, 1,",
            "    25, 128, 128, 128, 128, 10, 0, 0, 2,",
            "    24, 128, 128, 128, 10, 0, 0, 3,",
            "    17, 128, 128, 128, 10, 0, 0, 4,",
            "    16, 128, 128, 10, 0, 0, 5,",
            "    9, 128, 128, 10, 0, 0, 6,",
            "    8, 128, 10, 0, 0, 7,",
            "    1, 128, 10, 0, 0, 8,",
            "    0, 10, 0, 0, 9;",
            "}",
        ]
    );
}

#[test]
fn full_parameters_fixed_emission_order() {
    let spec = PoolSpec {
        pool_parameters: "allow members of \"some-class\"".into(),
        range: "10.0.0.10 - 10.0.0.50".into(),
        gateway: Some("10.0.0.1".to_string()),
        options: "ntp-servers 10.0.0.2".into(),
        parameters: "max-lease-time 300".into(),
        nameservers: vec!["10.0.0.2", "10.0.0.4"].into(),
        pxeserver: Some("10.0.0.2".to_string()),
        mtu: Some(9000),
        domain_name: Some("example.org".to_string()),
        static_routes: vec![
            route(24, "10.0.1.0", "10.0.0.2"),
            route(24, "10.0.2.0", "10.0.0.2"),
        ],
        search_domains: vec!["example.org", "other.example.org"].into(),
        ..base()
    };
    assert_eq!(
        render_pool(&spec).expect("render"),
        vec![
            "subnet 10.0.0.0 netmask 255.255.255.0 {",
            "  pool",
            "  {",
            "    allow members of \"some-class\";",
            "    range 10.0.0.10 - 10.0.0.50;",
            "  }",
            "  option domain-name \"example.org\";",
            "  option subnet-mask 255.255.255.0;",
            "  option routers 10.0.0.1;",
            "  option rfc3442-classless-static-routes",
            "    24, 10, 0, 1, 10, 0, 0, 2,",
            "    24, 10, 0, 2, 10, 0, 0, 2;",
            "  option ms-classless-static-routes",
            "    24, 10, 0, 1, 10, 0, 0, 2,",
            "    24, 10, 0, 2, 10, 0, 0, 2;",
            "  option ntp-servers 10.0.0.2;",
            "  max-lease-time 300;",
            "  option domain-name-servers 10.0.0.2, 10.0.0.4;",
            "  option domain-search \"example.org\", \"other.example.org\";",
            "  option interface-mtu 9000;",
            "  next-server 10.0.0.2;",
            "}",
        ]
    );
}

#[test]
fn passthrough_entries_keep_existing_semicolons() {
    let spec = PoolSpec {
        parameters: vec!["max-lease-time 300;", "default-lease-time 120"].into(),
        ..base()
    };
    let lines = render_pool(&spec).expect("render");
    assert!(lines.contains(&"  max-lease-time 300;".to_string()));
    assert!(lines.contains(&"  default-lease-time 120;".to_string()));
}

#[test]
fn missing_network_is_rejected() {
    let spec = PoolSpec {
        mask: "255.255.255.0".to_string(),
        ..PoolSpec::default()
    };
    assert_eq!(render_pool(&spec), Err(RenderError::MissingField("network")));
}

#[test]
fn missing_mask_is_rejected() {
    let spec = PoolSpec {
        network: "10.0.0.0".to_string(),
        ..PoolSpec::default()
    };
    assert_eq!(render_pool(&spec), Err(RenderError::MissingField("mask")));
}

#[test]
fn invalid_network_address_is_rejected() {
    let spec = PoolSpec {
        network: "10.0.0.256".to_string(),
        ..base()
    };
    assert_eq!(
        render_pool(&spec),
        Err(RenderError::InvalidAddress {
            field: "network",
            value: "10.0.0.256".to_string(),
        })
    );
}

#[test]
fn invalid_nameserver_is_rejected() {
    let spec = PoolSpec {
        nameservers: vec!["10.0.0.2", "not-an-address"].into(),
        ..base()
    };
    assert_eq!(
        render_pool(&spec),
        Err(RenderError::InvalidAddress {
            field: "nameservers",
            value: "not-an-address".to_string(),
        })
    );
}

#[test]
fn malformed_range_is_rejected() {
    let spec = PoolSpec {
        range: "10.0.0.10 to 10.0.0.50".into(),
        ..base()
    };
    assert_eq!(
        render_pool(&spec),
        Err(RenderError::MalformedRange(
            "10.0.0.10 to 10.0.0.50".to_string()
        ))
    );
}

#[test]
fn empty_entry_inside_range_list_is_rejected() {
    // An entirely empty range field means "no range", but an empty entry
    // inside an explicit list is malformed, not silently dropped.
    let spec = PoolSpec {
        range: vec!["10.0.0.10 - 10.0.0.50", ""].into(),
        ..base()
    };
    assert_eq!(
        render_pool(&spec),
        Err(RenderError::MalformedRange(String::new()))
    );
}

#[test]
fn route_with_bad_gateway_is_rejected_before_any_output() {
    let spec = PoolSpec {
        static_routes: vec![route(24, "10.0.1.0", "nowhere")],
        ..base()
    };
    assert_eq!(
        render_pool(&spec),
        Err(RenderError::InvalidAddress {
            field: "gateway",
            value: "nowhere".to_string(),
        })
    );
}

#[test]
fn zero_mtu_is_rejected() {
    let spec = PoolSpec {
        mtu: Some(0),
        ..base()
    };
    assert_eq!(render_pool(&spec), Err(RenderError::MalformedMtu));
}
