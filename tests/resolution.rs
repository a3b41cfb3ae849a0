//! End-to-end resolution behaviour of the route table.

use std::sync::Arc;
use std::thread;

use route_dispatch::routing::{normalize, HttpMethod, RouteError, RouteSpec};

mod common;

#[test]
fn test_scenario_default_root_and_users() {
    let mut builder = common::string_builder();
    builder
        .register(RouteSpec::get("/", "default.home".to_string()).builtin())
        .unwrap()
        .register(RouteSpec::get("/users/{id}", "h1".to_string()))
        .unwrap()
        .register(RouteSpec::get("/users/profile", "h2".to_string()))
        .unwrap();
    let table = builder.build().unwrap();

    let handler = |uri| table.resolve(uri, HttpMethod::Get).map(|d| d.handler().as_str());
    assert_eq!(handler("/users/profile"), Some("h2"));
    assert_eq!(handler("/users/7"), Some("h1"));
    assert_eq!(handler("/missing"), None);
    assert_eq!(handler("/"), Some("default.home"));
}

#[test]
fn test_literal_sibling_beats_wildcard() {
    let mut builder = common::string_builder();
    builder
        .register(RouteSpec::get("/users/{id}", "by_id".to_string()))
        .unwrap()
        .register(RouteSpec::get("/users/list", "list".to_string()))
        .unwrap();
    let table = builder.build().unwrap();

    let route = table.resolve("/users/list", HttpMethod::Get).unwrap();
    assert_eq!(route.uri_pattern(), "/users/list");
    assert_eq!(route.handler(), "list");
}

#[test]
fn test_static_routes_resolve_for_every_method() {
    let patterns = ["/a", "/a/b", "/a/b/c", "/index", "/v1.0/items"];
    let mut builder = common::string_builder();
    for pattern in patterns {
        for method in HttpMethod::ALL {
            let handler = format!("{} {}", method, pattern);
            builder.register(RouteSpec::new(pattern, method, handler)).unwrap();
        }
    }
    let table = builder.build().unwrap();

    for pattern in patterns {
        for method in HttpMethod::ALL {
            let route = table.resolve(pattern, method).unwrap();
            assert_eq!(route.handler(), &format!("{} {}", method, pattern));
            assert_eq!(route.method(), method);
        }
    }
}

#[test]
fn test_trailing_slash_index_fallback() {
    let mut builder = common::string_builder();
    builder
        .register(RouteSpec::get("/articles/index", "articles".to_string()))
        .unwrap();
    let table = builder.build().unwrap();

    let route = table.resolve("/articles/", HttpMethod::Get).unwrap();
    assert_eq!(route.handler(), "articles");
    assert!(table.resolve("/articles/", HttpMethod::Post).is_none());
}

#[test]
fn test_extension_does_not_change_match() {
    let mut builder = common::string_builder();
    builder
        .register(RouteSpec::get("/users/{id}", "show".to_string()))
        .unwrap();
    let table = builder.build().unwrap();

    let plain = table.resolve("/users/42", HttpMethod::Get).unwrap();
    let json = table.resolve("/users/42.json", HttpMethod::Get).unwrap();
    assert_eq!(plain, json);
}

#[test]
fn test_normalize_examples() {
    assert_eq!(normalize("//a///b/"), "/a/b");
    for raw in ["", "/", "a//b", "/x/", "///y///z///"] {
        let once = normalize(raw);
        assert_eq!(normalize(&once), once);
    }
}

#[test]
fn test_conflicting_application_routes_rejected() {
    let mut builder = common::string_builder();
    builder.register(RouteSpec::get("/a", "first".to_string())).unwrap();

    match builder.register(RouteSpec::get("/a", "second".to_string())) {
        Err(RouteError::Conflict(conflict)) => {
            assert_eq!(conflict.existing, "first");
            assert_eq!(conflict.incoming, "second");
        }
        other => panic!("expected conflict, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_default_then_application_override() {
    let mut builder = common::string_builder();
    builder
        .register(RouteSpec::get("/a", "default.a".to_string()).builtin())
        .unwrap();
    builder.register(RouteSpec::get("/a", "app.a".to_string())).unwrap();
    let table = builder.build().unwrap();

    assert_eq!(table.resolve("/a", HttpMethod::Get).unwrap().handler(), "app.a");
}

#[test]
fn test_no_match_is_none_for_odd_inputs() {
    let table = common::string_builder().build().unwrap();

    for uri in ["", "/", "//", ".", "/.", "/a/b/c/d/e", "no-leading-slash", "/%20", "/a.b.c/"] {
        for method in HttpMethod::ALL {
            let _ = table.resolve(uri, method);
        }
    }
    assert!(table.resolve("/missing", HttpMethod::Get).is_none());
    assert_eq!(table.not_found().uri_pattern(), "/404");
}

#[test]
fn test_config_built_table() {
    let table = common::table_from_toml(common::SAMPLE_ROUTES);

    let show = table.resolve("/users/9", HttpMethod::Delete).unwrap();
    assert_eq!(show.handler().to_string(), "users.show");
    assert!(show.honor_extension());

    let old = table.resolve("/users/old-profile", HttpMethod::Get).unwrap();
    assert_eq!(old.redirect_to(), Some("/users/profile"));

    let index = table.resolve("/articles/", HttpMethod::Get).unwrap();
    assert_eq!(index.handler().to_string(), "articles.index");
}

#[test]
fn test_concurrent_resolution_sees_full_table() {
    let mut builder = common::string_builder();
    for i in 0..100 {
        builder
            .register(RouteSpec::get(format!("/static/{}", i), format!("s{}", i)))
            .unwrap()
            .register(RouteSpec::get(format!("/dyn/{}/{{id}}", i), format!("d{}", i)))
            .unwrap();
    }
    let table = Arc::new(builder.build().unwrap());

    let workers: Vec<_> = (0..8)
        .map(|_| {
            let table = Arc::clone(&table);
            thread::spawn(move || {
                for i in 0..100 {
                    let s = table.resolve(&format!("/static/{}", i), HttpMethod::Get).unwrap();
                    assert_eq!(s.handler(), &format!("s{}", i));
                    let d = table.resolve(&format!("/dyn/{}/x", i), HttpMethod::Get).unwrap();
                    assert_eq!(d.handler(), &format!("d{}", i));
                }
            })
        })
        .collect();

    for worker in workers {
        worker.join().unwrap();
    }
}
