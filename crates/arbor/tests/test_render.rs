use arbor::{Forest, NodeId, Result, render};

fn assert_renders(forest: &Forest, root: NodeId, expected: &[&str]) {
    let text = render(forest, root).unwrap().render();
    assert_eq!(text, expected.join("\n"));
}

#[test]
fn single_node_renders_its_label() {
    let mut forest = Forest::new();
    let solo = forest.field("solo");
    assert_renders(&forest, solo, &[" solo "]);

    let mut forest = Forest::new();
    let solo = forest.table("solo");
    assert_renders(&forest, solo, &["[solo] "]);
}

#[test]
fn linear_chain_uses_straight_connectors() -> Result<()> {
    let mut forest = Forest::new();
    let a = forest.field("a");
    let b = forest.field("b");
    let c = forest.field("c");
    forest.attach(a, b)?;
    forest.attach(b, c)?;
    assert_renders(&forest, a, &[" a ─ b ─ c "]);
    Ok(())
}

#[test]
fn three_children_stack_junctions_top_to_bottom() -> Result<()> {
    let mut forest = Forest::new();
    let root = forest.field("r");
    for name in ["x", "y", "z"] {
        let child = forest.field(name);
        forest.attach(root, child)?;
    }
    assert_renders(
        &forest,
        root,
        &[
            " r ┬ x ", //
            "   ├ y ",
            "   └ z ",
        ],
    );
    Ok(())
}

#[test]
fn junction_offsets_accumulate_subtree_heights() -> Result<()> {
    let mut forest = Forest::new();
    let root = forest.field("r");
    let m = forest.field("m");
    let n = forest.field("n");
    let p = forest.field("p");
    let q = forest.field("q");
    forest.attach(root, m)?;
    forest.attach(root, n)?;
    forest.attach(m, p)?;
    forest.attach(m, q)?;

    // m's subtree is two rows tall, so n's corner lands on row 2 and the
    // vertical rule bridges the row between.
    assert_renders(
        &forest,
        root,
        &[
            " r ┬ m ┬ p ", //
            "   │   └ q ",
            "   └ n     ",
        ],
    );
    Ok(())
}

#[test]
fn batches_at_the_same_depth_use_their_own_column_width() -> Result<()> {
    let mut forest = Forest::new();
    let root = forest.field("r");
    let a = forest.field("a");
    let b = forest.field("b");
    let wide = forest.field("long");
    let narrow = forest.field("q");
    let wide_leaf = forest.field("s");
    let narrow_leaf = forest.field("t");
    forest.attach(root, a)?;
    forest.attach(root, b)?;
    forest.attach(a, wide)?;
    forest.attach(b, narrow)?;
    forest.attach(wide, wide_leaf)?;
    forest.attach(narrow, narrow_leaf)?;

    // "long" and "q" sit at the same depth but belong to different batches,
    // so their connector columns are computed independently: one column band
    // per subtree, not a globally aligned level.
    assert_renders(
        &forest,
        root,
        &[
            " r ┬ a ─ long ─ s ", //
            "   └ b ─ q ─ t    ",
        ],
    );
    Ok(())
}

#[test]
fn shorter_sibling_is_padded_to_the_batch_width() -> Result<()> {
    let mut forest = Forest::new();
    let root = forest.field("r");
    let a = forest.field("aaaa");
    let b = forest.field("b");
    let x = forest.field("x");
    let y = forest.field("y");
    forest.attach(root, a)?;
    forest.attach(root, b)?;
    forest.attach(a, x)?;
    forest.attach(b, y)?;

    // a and b are one batch, so b's label is widened to a's width before its
    // own child connector is drawn.
    assert_renders(
        &forest,
        root,
        &[
            " r ┬ aaaa ─ x ", //
            "   └─── b ─ y ",
        ],
    );
    Ok(())
}

#[test]
fn table_root_with_two_field_children() -> Result<()> {
    let mut forest = Forest::new();
    let users = forest.table("users");
    let alice = forest.field("Alice");
    let bob = forest.field("Bob");
    forest.attach(users, alice)?;
    forest.attach(users, bob)?;
    assert_renders(
        &forest,
        users,
        &[
            "[users] ┬ Alice ", //
            "        └── Bob ",
        ],
    );
    Ok(())
}

#[test]
fn siblings_share_a_column_width() -> Result<()> {
    let mut forest = Forest::new();
    let root = forest.table("t");
    let short = forest.field("id");
    let long = forest.field("created");
    forest.attach(root, short)?;
    forest.attach(root, long)?;

    // The batch column is as wide as its widest label; the shorter field is
    // left-padded with the fill rule.
    assert_renders(
        &forest,
        root,
        &[
            "[t] ┬───── id ", //
            "    └ created ",
        ],
    );
    Ok(())
}

#[test]
fn render_text_is_stable_across_calls() -> Result<()> {
    let mut forest = Forest::new();
    let root = forest.table("t");
    let child = forest.field("c");
    forest.attach(root, child)?;
    let canvas = render(&forest, root)?;
    assert_eq!(canvas.render(), canvas.render());
    Ok(())
}
