//! Landing page module
//!
//! Serves the HTML form that submits to the echo endpoint.

/// Path of the echo endpoint the form posts to
pub const TEXTAREA_PATH: &str = "/textarea";

pub fn get_form_page() -> String {
    String::from(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Text Area Server</title>
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
            line-height: 1.6;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            color: white;
        }
        .container {
            text-align: center;
            padding: 40px;
            background: rgba(255, 255, 255, 0.1);
            border-radius: 20px;
            backdrop-filter: blur(10px);
            box-shadow: 0 8px 32px 0 rgba(31, 38, 135, 0.37);
            border: 1px solid rgba(255, 255, 255, 0.18);
            max-width: 600px;
        }
        h1 {
            font-size: 2.2em;
            margin-bottom: 20px;
            font-weight: 700;
        }
        p {
            font-size: 1.1em;
            margin: 15px 0;
            opacity: 0.9;
        }
        textarea {
            width: 100%;
            min-height: 160px;
            padding: 12px;
            border: none;
            border-radius: 10px;
            font-size: 1em;
            font-family: inherit;
            resize: vertical;
        }
        button {
            margin-top: 20px;
            padding: 12px 40px;
            border: none;
            border-radius: 10px;
            font-size: 1.1em;
            font-weight: 700;
            color: #667eea;
            background: white;
            cursor: pointer;
        }
        button:hover {
            opacity: 0.9;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>Text Area</h1>
        <p>Enter some text and submit it to see it echoed back.</p>
        <form action="/textarea" method="post">
            <textarea name="textcontent" placeholder="Type something..."></textarea>
            <button type="submit">Submit</button>
        </form>
    </div>
</body>
</html>"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_targets_echo_endpoint() {
        let page = get_form_page();
        assert!(page.contains(r#"<form action="/textarea" method="post">"#));
    }

    #[test]
    fn test_textarea_field_name() {
        let page = get_form_page();
        assert!(page.contains(r#"name="textcontent""#));
    }
}
