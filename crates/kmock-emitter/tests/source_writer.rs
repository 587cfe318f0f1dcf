use super::*;

#[test]
fn test_block_indents_body_and_closes_brace() {
    let mut w = SourceWriter::new(4);
    w.block("class A", |w| {
        w.line("val x = 1");
        w.block("fun f()", |w| w.line("return"));
    });
    assert_eq!(
        w.finish(),
        "class A {\n    val x = 1\n    fun f() {\n        return\n    }\n}\n"
    );
}

#[test]
fn test_block_closes_on_early_error() {
    let mut w = SourceWriter::new(2);
    let result: Result<(), &str> = w.block("object O", |w| {
        w.line("first");
        Err::<(), _>("stop")?;
        w.line("unreachable");
        Ok(())
    });
    assert_eq!(result, Err("stop"));
    assert_eq!(w.indent_level(), 0);
    assert_eq!(w.finish(), "object O {\n  first\n}\n");
}

#[test]
fn test_partial_lines_are_joined() {
    let mut w = SourceWriter::new(4);
    w.indented(|w| {
        w.write("override fun f(");
        w.write("a: Int");
        w.write(")");
    });
    assert_eq!(w.finish(), "    override fun f(a: Int)\n");
}

#[test]
fn test_blank_lines_collapse() {
    let mut w = SourceWriter::new(4);
    w.line("package a");
    w.blank_line();
    w.blank_line();
    w.line("import b.*");
    assert_eq!(w.finish(), "package a\n\nimport b.*\n");
}

#[test]
fn test_blank_line_at_start_is_dropped() {
    let mut w = SourceWriter::new(4);
    w.blank_line();
    w.line("x");
    assert_eq!(w.finish(), "x\n");
}
