//! HTML rendering of the item list page

use std::fmt::Write;

use crate::database::Item;

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const DELETE_SCRIPT: &str = r#"<script>
async function deleteItem(id) {
    await fetch('/items/' + id, { method: 'DELETE' });
    window.location.reload();
}
</script>"#;

fn item_row(out: &mut String, item: &Item) {
    let name = escape_html(&item.name);
    // Writing to a String cannot fail.
    let _ = write!(
        out,
        r#"<tr>
<td>{id}</td>
<td>{name}</td>
<td>{display_price}</td>
<td>
<form method="post" action="/items/{id}">
<input type="text" name="name" value="{name}" required>
<input type="text" name="price" value="{price}" required>
<button type="submit">Update</button>
</form>
<button type="button" onclick="deleteItem({id})">Delete</button>
</td>
</tr>
"#,
        id = item.id,
        name = name,
        display_price = item.display_price(),
        price = item.price,
    );
}

/// Render the full list page
pub fn index_page(title: &str, items: &[Item]) -> String {
    let title = escape_html(title);
    let mut rows = String::new();

    if items.is_empty() {
        rows.push_str("<tr><td colspan=\"4\">No items yet.</td></tr>\n");
    }
    for item in items {
        item_row(&mut rows, item);
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<h1>{title}</h1>
<form method="post" action="/items">
<input type="text" name="name" placeholder="Name" required>
<input type="text" name="price" placeholder="Price" required>
<button type="submit">Add</button>
</form>
<table>
<thead><tr><th>ID</th><th>Name</th><th>Price</th><th>Actions</th></tr></thead>
<tbody>
{rows}</tbody>
</table>
{script}
</body>
</html>
"#,
        title = title,
        rows = rows,
        script = DELETE_SCRIPT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_index_page_empty() {
        let html = index_page("CRUD Example", &[]);
        assert!(html.contains("<title>CRUD Example</title>"));
        assert!(html.contains("No items yet."));
        assert!(html.contains(r#"action="/items""#));
    }

    #[test]
    fn test_index_page_lists_items() {
        let items = vec![
            Item { id: 1, name: "Widget".to_string(), price: 9.99 },
            Item { id: 2, name: "<script>".to_string(), price: 12.5 },
        ];
        let html = index_page("CRUD Example", &items);

        assert!(!html.contains("No items yet."));
        assert!(html.contains("<td>Widget</td>"));
        assert!(html.contains("<td>9.99</td>"));
        assert!(html.contains("<td>12.50</td>"));
        assert!(html.contains(r#"action="/items/2""#));
        assert!(html.contains("deleteItem(1)"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<td><script></td>"));
    }
}
