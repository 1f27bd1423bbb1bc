use ai_markdown::{render, render_sanitized, sanitize};

#[test]
fn test_heading() {
    let html = render("## Resumo Executivo");
    assert_eq!(html, "<h4>Resumo Executivo</h4>");

    let html = render("### Detalhes");
    assert_eq!(html, "<h4>Detalhes</h4>");
}

#[test]
fn test_heading_requires_two_or_three_hashes() {
    // One hash and four hashes are outside the dialect
    assert_eq!(render("# Titulo"), "<p># Titulo</p>");
    assert_eq!(render("#### Titulo"), "<p>#### Titulo</p>");
    // Hashes without a following space are plain text
    assert_eq!(render("##Titulo"), "<p>##Titulo</p>");
}

#[test]
fn test_paragraph() {
    let html = render("Uma frase simples.");
    assert_eq!(html, "<p>Uma frase simples.</p>");
}

#[test]
fn test_bold() {
    let html = render("Risco **alto** detectado.");
    assert_eq!(html, "<p>Risco <strong>alto</strong> detectado.</p>");
}

#[test]
fn test_unclosed_bold_passes_through() {
    assert_eq!(render("sem **fecho"), "<p>sem **fecho</p>");
    // An empty span is not a span
    assert_eq!(render("a **** b"), "<p>a **** b</p>");
}

#[test]
fn test_unordered_list() {
    let html = render("- item um\n- item dois");
    assert_eq!(html, "<ul><li>item um</li><li>item dois</li></ul>");

    // Asterisk bullets join the same list
    let html = render("* a\n- b");
    assert_eq!(html, "<ul><li>a</li><li>b</li></ul>");
}

#[test]
fn test_ordered_list() {
    let html = render("1. primeiro\n2. segundo");
    assert_eq!(html, "<ol><li>primeiro</li><li>segundo</li></ol>");
}

#[test]
fn test_switching_list_kind_closes_the_open_list() {
    let html = render("- a\n1. b");
    assert_eq!(html, "<ul><li>a</li></ul><ol><li>b</li></ol>");
}

#[test]
fn test_blank_line_closes_list() {
    let html = render("- a\n\ntexto");
    assert_eq!(html, "<ul><li>a</li></ul><p>texto</p>");
}

#[test]
fn test_list_left_open_at_end_of_input_is_closed() {
    assert_eq!(render("1. só um"), "<ol><li>só um</li></ol>");
}

#[test]
fn test_empty_input() {
    assert_eq!(render(""), "");
    assert_eq!(render("   \n  \n"), "");
}

#[test]
fn test_crlf_input() {
    let html = render("## Titulo\r\n- item\r\n");
    assert_eq!(html, "<h4>Titulo</h4><ul><li>item</li></ul>");
}

#[test]
fn test_ai_summary_shape() {
    // The shape the analysis service actually produces
    let html = render("**Resumo**\n\n- item um\n- item dois");
    assert_eq!(
        html,
        "<p><strong>Resumo</strong></p><ul><li>item um</li><li>item dois</li></ul>"
    );
}

#[test]
fn test_escaping_applied_exactly_once() {
    let html = render("Tom & Jerry & Cia");
    assert_eq!(html, "<p>Tom &amp; Jerry &amp; Cia</p>");
    // No double escaping of an ampersand already present
    assert!(!html.contains("&amp;amp;"));
}

#[test]
fn test_inline_html_is_escaped() {
    let html = render("clique <a href='x'>aqui</a>");
    assert!(!html.contains("<a"));
    assert!(html.contains("&lt;a href=&#39;x&#39;&gt;"));
}

#[test]
fn test_render_is_deterministic() {
    let input = "## T\n- a\n- b\n\n1. c\n\n**d** & e";
    assert_eq!(render(input), render(input));
}

#[test]
fn test_sanitize_keeps_renderer_output_intact() {
    let html = "<h4>T</h4><p><strong>a</strong></p><ul><li>b</li></ul><ol><li>c</li></ol>";
    assert_eq!(sanitize(html), html);
}

#[test]
fn test_sanitize_strips_script() {
    let out = sanitize("<p>ok</p><script>alert(1)</script>");
    assert!(!out.contains("<script"));
    assert!(out.contains("<p>ok</p>"));
}

#[test]
fn test_sanitize_drops_attributes_from_allowed_tags() {
    let out = sanitize(r#"<p onclick="alert(1)">x</p>"#);
    assert_eq!(out, "<p>x</p>");
}

#[test]
fn test_sanitize_escapes_disallowed_tags() {
    let out = sanitize("<img src=x onerror=alert(1)>");
    assert!(!out.contains("<img"));
    assert!(out.starts_with("&lt;"));
}

#[test]
fn test_adversarial_input_through_the_full_pipeline() {
    let out = render_sanitized("texto <img src=x onerror=alert(1)> fim");
    assert!(!out.contains("<img"));
    assert!(!out.contains("<script"));
    // The paragraph wrapper survives
    assert!(out.starts_with("<p>"));
    assert!(out.ends_with("</p>"));
}

#[test]
fn test_sanitize_handles_unterminated_tag() {
    let out = sanitize("<p>ok</p><scr");
    assert!(out.ends_with("&lt;scr"));
}
