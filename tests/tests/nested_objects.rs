//! Recursive descent over nested objects.

use vet_tests::prelude::*;

mod descent_order {
    use super::*;

    #[test]
    fn test_nested_template_violations_precede_owner_fields() {
        // GIVEN - the embedded template is bad, and so is a later owner field
        let registry = builtin_registry();
        let walker = Walker::new(&registry);
        let spawner = Spawner {
            label: String::from("east-gate"),
            template: Some(Box::new(Enemy {
                name: String::new(),
                hp: 10.0,
                speed: 1.0,
            })),
            capacity: 0,
            cooldown: 12.0,
        };

        // WHEN
        let report = walker.walk(&spawner, WalkMode::ContinueOnError).unwrap();

        // THEN - the template's record lands before the owner's capacity record
        assert_report(&report)
            .total(2)
            .nth_origin(0, "Enemy", Some("name"))
            .nth_origin(1, "Spawner", Some("capacity"));
    }

    #[test]
    fn test_violation_deep_in_a_chain_is_attributed() {
        // GIVEN - the middle waypoint of three has no name
        let registry = builtin_registry();
        let walker = Walker::new(&registry);
        let mut route = PatrolRoute::chain(3);
        route.next.as_mut().unwrap().name = String::new();

        // WHEN
        let report = walker.walk(&route, WalkMode::ContinueOnError).unwrap();

        // THEN
        assert_report(&report)
            .total(1)
            .nth_origin(0, "PatrolRoute", Some("name"))
            .nth_matches(0, "^field 'name' on 'PatrolRoute' must not be empty\\.$");
    }

    #[test]
    fn test_relay_marker_on_scalar_is_inert() {
        // GIVEN - channel is tagged for descent but holds a plain int
        let registry = builtin_registry();
        let walker = Walker::new(&registry);

        // WHEN/THEN - no descent, and the value checks still run
        let report = walker
            .walk(&Relay { channel: 5 }, WalkMode::ContinueOnError)
            .unwrap();
        assert_report(&report).clean();

        let report = walker
            .walk(&Relay { channel: -2 }, WalkMode::ContinueOnError)
            .unwrap();
        assert_report(&report)
            .total(1)
            .nth_kind(0, ConstraintKind::NotNegative);
    }
}

mod chain_depth {
    use super::*;

    #[test]
    fn test_route_within_the_limit_is_clean() {
        // GIVEN - four waypoints occupy depths 0 through 3
        let registry = builtin_registry();
        let walker = Walker::new(&registry).with_max_depth(3);
        let route = PatrolRoute::chain(4);

        // WHEN/THEN
        let report = walker.walk(&route, WalkMode::ContinueOnError).unwrap();
        assert_report(&report).clean();
    }

    #[test]
    fn test_deep_route_is_cut_at_the_limit() {
        // GIVEN
        let registry = builtin_registry();
        let walker = Walker::new(&registry).with_max_depth(3);
        let route = PatrolRoute::chain(6);

        // WHEN
        let report = walker.walk(&route, WalkMode::ContinueOnError).unwrap();

        // THEN - exactly one record, at the waypoint that could not descend
        assert_report(&report)
            .total(1)
            .nth_class(0, ViolationClass::RecursionLimit)
            .nth_matches(
                0,
                "^field 'next' on 'PatrolRoute' exceeds the maximum recursion depth \\(3\\)\\.$",
            );

        // AND - fail-fast surfaces the same condition as an error
        let error = walker.walk(&route, WalkMode::FailFast).unwrap_err();
        assert!(matches!(error, WalkError::RecursionLimit { limit: 3 }));
    }

    #[test]
    fn test_sibling_fields_still_checked_after_a_cut_branch() {
        // GIVEN - the route exceeds the limit and the banner is blank
        let registry = builtin_registry();
        let walker = Walker::new(&registry).with_max_depth(2);
        let camp = Camp {
            route: PatrolRoute::chain(10),
            banner: String::new(),
        };

        // WHEN
        let report = walker.walk(&camp, WalkMode::ContinueOnError).unwrap();

        // THEN - cutting the deep branch did not end the walk
        assert_report(&report)
            .total(2)
            .nth_class(0, ViolationClass::RecursionLimit)
            .nth_origin(1, "Camp", Some("banner"));
    }

    #[test]
    fn test_default_depth_accommodates_long_routes() {
        // GIVEN
        let registry = builtin_registry();
        let walker = Walker::new(&registry);
        let route = PatrolRoute::chain(50);

        // WHEN/THEN
        let report = walker.walk(&route, WalkMode::ContinueOnError).unwrap();
        assert_report(&report).clean();
    }
}

mod context_through_descent {
    use super::*;

    #[test]
    fn test_context_reaches_nested_records() {
        // GIVEN
        let registry = builtin_registry();
        let walker = Walker::new(&registry);
        let spawner = Spawner {
            label: String::new(),
            template: Some(Box::new(Enemy {
                name: String::new(),
                hp: 10.0,
                speed: 1.0,
            })),
            capacity: 3,
            cooldown: 12.0,
        };
        let context = ContextRef::new(String::from("Docks.scene"));

        // WHEN
        let report = walker
            .walk_with_context(&spawner, WalkMode::ContinueOnError, context)
            .unwrap();

        // THEN - the owner's record and the nested one carry the same scene
        assert_report(&report).total(2);
        for violation in &report {
            let scene = violation
                .context
                .as_ref()
                .and_then(|ctx| ctx.downcast_ref::<String>())
                .map(String::as_str);
            assert_eq!(scene, Some("Docks.scene"));
        }
    }
}
