//! End-to-end rendering of dynamic queries built from optional filters.

use chrono::NaiveDate;
use sqld::{Dialect, Fragment, Op, RenderConfig};

#[derive(Default)]
struct Filters {
    name: Option<String>,
    pizzas: Vec<String>,
    opened_after: Option<NaiveDate>,
    order_by: Option<String>,
    limit: Option<i64>,
}

fn pizzerias(filters: &Filters) -> Op {
    let name = sqld::fmt_contains(filters.name.clone());

    sqld::new([
        sqld::select(["name", "pizzas"]),
        sqld::block("FROM pizzerias"),
        sqld::where_([sqld::and([
            sqld::if_not_nil(&name, sqld::ilike("name", name.clone())),
            sqld::if_not_empty(
                &filters.pizzas,
                sqld::in_list("pizzas", filters.pizzas.clone()),
            ),
            sqld::if_not_nil(
                &filters.opened_after,
                sqld::gt("opened_at", filters.opened_after),
            ),
        ])]),
        sqld::order_by([sqld::if_not_nil(
            &filters.order_by,
            sqld::desc(filters.order_by.clone()),
        )]),
        sqld::limit(filters.limit),
    ])
}

fn shown(fragment: &Fragment) -> Vec<String> {
    fragment.params.iter().map(|p| format!("{p:?}")).collect()
}

#[test]
fn no_filters_drops_every_optional_clause() {
    let stmt = pizzerias(&Filters::default()).render().unwrap();

    assert_eq!(stmt.sql, "SELECT\n\tname,\n\tpizzas\nFROM pizzerias");
    assert!(stmt.params.is_empty());
}

#[test]
fn every_filter_set() {
    let filters = Filters {
        name: Some("mario".into()),
        pizzas: vec!["margherita".into(), "diavola".into()],
        opened_after: NaiveDate::from_ymd_opt(2020, 1, 15),
        order_by: Some("rating".into()),
        limit: Some(10),
    };
    let stmt = pizzerias(&filters).render().unwrap();

    assert_eq!(
        stmt.sql,
        "SELECT\n\tname,\n\tpizzas\n\
         FROM pizzerias\n\
         WHERE (\n\tname ILIKE ? AND\n\tpizzas IN (?, ?) AND\n\topened_at > ?\n)\n\
         ORDER BY rating DESC\n\
         LIMIT ?"
    );
    assert_eq!(
        shown(&stmt),
        vec![
            "\"%mario%\"",
            "\"margherita\"",
            "\"diavola\"",
            "2020-01-15",
            "10"
        ]
    );
}

#[test]
fn only_list_filter() {
    let filters = Filters {
        pizzas: vec!["marinara".into()],
        ..Default::default()
    };
    let stmt = pizzerias(&filters).render().unwrap();

    assert_eq!(
        stmt.sql,
        "SELECT\n\tname,\n\tpizzas\nFROM pizzerias\nWHERE (\n\tpizzas IN (?)\n)"
    );
    assert_eq!(shown(&stmt), vec!["\"marinara\""]);
}

#[test]
fn postgres_numbers_placeholders_once() {
    let filters = Filters {
        name: Some("mario".into()),
        pizzas: vec!["margherita".into(), "diavola".into()],
        limit: Some(5),
        ..Default::default()
    };
    let stmt = sqld::render_with(&pizzerias(&filters), &RenderConfig::postgres()).unwrap();

    assert_eq!(
        stmt.sql,
        "SELECT\n\tname,\n\tpizzas\n\
         FROM pizzerias\n\
         WHERE (\n\tname ILIKE $1 AND\n\tpizzas IN ($2, $3)\n)\n\
         LIMIT $4"
    );
    assert_eq!(stmt.params_ref().len(), 4);
}

#[test]
fn generic_dialect_keeps_question_marks() {
    let filters = Filters {
        name: Some("mario".into()),
        ..Default::default()
    };
    let config = RenderConfig::new().with_dialect(Dialect::Generic);
    let stmt = sqld::render_with(&pizzerias(&filters), &config).unwrap();
    assert!(stmt.sql.contains("name ILIKE ?"));
}

#[test]
fn unguarded_filters_report_every_failure() {
    let filters = Filters::default();
    let query = sqld::new([
        sqld::select(["name"]),
        sqld::block("FROM pizzerias"),
        sqld::where_([sqld::and([
            sqld::eq("name", filters.name.clone()),
            sqld::in_list("pizzas", filters.pizzas.clone()),
        ])]),
        sqld::order_by([sqld::desc(filters.order_by.clone())]),
    ]);

    let err = query.render().unwrap_err();
    assert_eq!(err.root_causes().len(), 3);
    assert!(err.is_nil_value());
    assert!(err.is_empty_slice());
    assert!(err.is_nil_column_expression());
    assert_eq!(
        err.to_string(),
        "query: where: and: eq (name): value is nil\n\
         in (pizzas): slice is empty\n\
         order by: desc: column expression is nil"
    );
}

#[test]
fn render_with_propagates_errors() {
    let err = sqld::render_with(&sqld::new([]), &RenderConfig::postgres()).unwrap_err();
    assert!(err.is_no_operators());
}

#[test]
fn joined_report_query() {
    let min_orders: Option<i64> = Some(3);

    let query = sqld::new([
        sqld::select_ops([
            sqld::columns(["p.name"]),
            sqld::as_(sqld::coalesce(sqld::count(sqld::block("o.id")), "0"), "orders"),
        ]),
        sqld::from(sqld::block("pizzerias p")),
        sqld::left_join(
            sqld::block("orders o"),
            sqld::column_eq("o.pizzeria_id", "p.id"),
        ),
        sqld::where_([sqld::not(sqld::null("p.opened_at"))]),
        sqld::group_by([sqld::block("p.name")]),
        sqld::having([sqld::if_not_nil(
            &min_orders,
            sqld::gte("COUNT(o.id)", min_orders),
        )]),
    ]);

    let stmt = sqld::render_with(&query, &RenderConfig::postgres()).unwrap();
    assert_eq!(
        stmt.sql,
        "SELECT\n\tp.name,\n\tCOALESCE(COUNT(o.id), 0) AS orders\n\
         FROM pizzerias p\n\
         LEFT JOIN orders o ON o.pizzeria_id = p.id\n\
         WHERE NOT(p.opened_at IS NULL)\n\
         GROUP BY p.name\n\
         HAVING COUNT(o.id) >= $1"
    );
    assert_eq!(shown(&stmt), vec!["3"]);
}

#[test]
fn operators_are_shared_between_threads() {
    let query = pizzerias(&Filters {
        pizzas: vec!["margherita".into()],
        ..Default::default()
    });
    let expected = query.render().unwrap().sql;

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let query = query.clone();
            std::thread::spawn(move || query.render().unwrap().sql)
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
