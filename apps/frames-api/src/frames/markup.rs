// Static markup for the frame document.
// Placeholders are substituted by `template::build_document`; `{user_text}`
// always last.

/// Fixed logical canvas width shared by the document and the render request.
pub const CANVAS_WIDTH_PX: u32 = 720;

pub const TITLE: &str = "THE BLACK SHOP";
pub const SUBTITLE: &str = "Diablo IV Season 9 carries · piloting · item exchange";
pub const CTA_LABEL: &str = "💬 Tap the price list to open the chat!";
pub const PRICE_HEADING: &str = "💰 Live price list";

/// (icon, label) for the four informational lines, in display order.
pub const INFO_LINES: [(&str, &str); 4] = [
    ("🦾", "Every gear piece, item and material in stock"),
    ("🚌", "Carries, piloting and build setup, fully supported"),
    ("🦸‍♂️", "Experienced pros on standby around the clock"),
    ("🔥", "Fair real-time prices, lowest guaranteed"),
];

pub const FRAME_DOCUMENT: &str = r#"<!DOCTYPE html>
<html lang="ko">
<head>
  <meta charset="UTF-8">
  <title>{title} frame {frame_index}</title>
  <link href="https://fonts.googleapis.com/css2?family=Noto+Sans+KR:wght@400;500;600;700;800&display=swap" rel="stylesheet">
  <style>
    body {
      background: #000000;
      margin: 0;
      padding: 0;
      font-family: 'Noto Sans KR', Arial, sans-serif;
    }

    .render-target {
      width: {width}px;
      height: {height}px;
      margin: 0;
      background: linear-gradient(135deg, #1a1a1a 0%, #0d0d0d 100%);
      color: #ffffff;
      padding: 15px;
      box-sizing: border-box;
      position: relative;
      overflow: hidden;
    }

    .shop-title {
      font-size: 55px;
      font-weight: 800;
      text-align: center;
      margin: 2px 0;
      letter-spacing: 2px;
      background: linear-gradient({title_gradient});
      -webkit-background-clip: text;
      -webkit-text-fill-color: transparent;
      background-clip: text;
    }

    .icon {
      display: inline-block;
      margin: 0 10px;
      font-size: 32px;
      transform: scale({icon_scale});
    }

    .shop-subtitle {
      text-align: center;
      font-size: 18px;
      color: #cccccc;
      margin-bottom: 10px;
    }

    .subtitle-divider {
      border: none;
      border-top: 1px solid #444444;
      margin: 20px auto;
      width: 80%;
    }

    .info-list {
      list-style: none;
      padding: 0;
      margin: 1px 0;
      text-align: center;
    }

    .info-list li {
      font-size: 18px;
      margin: 3px 0;
      color: #ffffff;
      text-align: center;
    }

    .info-list .icon {
      margin-right: 15px;
      font-size: 24px;
    }

    .info-list li.highlighted .icon {
      color: {highlight_color};
      transform: scale(1.1);
    }

    .cta-btn {
      text-align: center;
      font-size: 22px;
      font-weight: 700;
      padding: 15px 1px;
      margin: 15px auto;
      border-radius: 15px;
      border: 2px solid {cta_border};
      max-width: 400px;
      background: linear-gradient({cta_gradient});
      box-shadow: {cta_glow};
    }

    .divider {
      border: none;
      border-top: 2px solid #444444;
      margin: 20px auto;
      width: 90%;
    }

    .section-price-title {
      text-align: center;
      font-size: 33px;
      font-weight: 700;
      margin: 5px 0;
      color: {price_color};
      text-shadow: {price_shadow};
    }

    .description {
      text-align: center;
      font-size: 16px;
      color: #aaaaaa;
      margin: 20px 0;
      line-height: 1.6;
      white-space: pre-wrap;
      word-wrap: break-word;
      padding: 15px;
      background: rgba(255, 255, 255, 0.05);
      border-radius: 10px;
      border: 1px solid rgba(255, 255, 255, 0.1);
      min-height: 50px;
    }
  </style>
</head>
<body>
  <div class="render-target frame-{frame_index}">
    <div>
      <h1 class="shop-title">{title}</h1>
      <div class="shop-subtitle">{subtitle}</div>
      <hr class="subtitle-divider">
    </div>

    <ul class="info-list">
{info_items}
    </ul>

    <div class="cta-btn">{cta_label}</div>

    <hr class="divider">

    <div>
      <h2 class="section-price-title">{price_heading}</h2>
    </div>

    <div class="description">{user_text}</div>
  </div>
</body>
</html>
"#;
