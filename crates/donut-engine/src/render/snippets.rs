//! Inline-styled HTML fragments the host injects into badge containers
//! and SVG defs. Styling lives in the strings because the page these
//! charts land on ships no stylesheet for them.

use crate::api::types::Category;
use crate::core::lucky::LuckyNumber;

/// Badge color for a category that earned nothing.
const MUTED: &str = "#CBD5E1";

/// Score badge markup for one named category. Lucky picks render
/// heavier and larger.
pub fn badge_span(pct: f32, category: Category, lucky: bool) -> String {
    let rounded = pct.round() as i32;
    let accent = category.gradient().dark;
    if lucky {
        format!(
            r#"<span style="color: {accent}; font-weight: 800; font-size: 1.1rem;">{rounded}%</span>"#
        )
    } else {
        let color = if pct > 0.0 { accent } else { MUTED };
        format!(r#"<span style="color: {color}; font-weight: 700;">{rounded}%</span>"#)
    }
}

const SHIMMER: &str = r#"<div class="shimmer" style="position: absolute; top:0; left:0; width:100%; height:100%; background: linear-gradient(90deg, transparent, rgba(255,255,255,0.4), transparent); animation: lucky-shimmer 1.5s infinite;"></div>"#;

fn shimmer_bar(style: &str) -> String {
    format!(r#"<div style="{style}">{SHIMMER}</div>"#)
}

/// Placeholder shown while a lucky number is being fetched. Mimics the
/// layout of the number card: three text rows and two buttons.
pub fn loading_skeleton() -> String {
    let rows = [
        shimmer_bar("height: 16px; width: 65%; background: #F1F5F9; border-radius: 8px; align-self: center; position: relative; overflow: hidden;"),
        shimmer_bar("height: 45px; width: 90%; background: #F1F5F9; border-radius: 12px; align-self: center; position: relative; overflow: hidden;"),
        shimmer_bar("height: 25px; width: 40%; background: #F1F5F9; border-radius: 8px; align-self: center; position: relative; overflow: hidden;"),
    ];
    let buttons = [
        shimmer_bar("height: 45px; flex: 2; background: #F1F5F9; border-radius: 14px; position: relative; overflow: hidden;"),
        shimmer_bar("height: 45px; flex: 1; background: #F1F5F9; border-radius: 14px; position: relative; overflow: hidden;"),
    ];
    format!(
        r#"<div class="lucky-skeleton" style="width: 100%; height: 255px; background: #fff; border-top: 1px solid #E2E8F0; border-bottom: 1px solid #E2E8F0; padding: 32px 24px; display: flex; flex-direction: column; gap: 20px; position: relative; overflow: hidden; box-sizing: border-box; margin: 4px 0;">{}{}{}<div style="display: flex; gap: 12px; margin-top: auto;">{}{}</div><style>@keyframes lucky-shimmer {{ 0% {{ transform: translateX(-100%); }} 100% {{ transform: translateX(100%); }} }}</style></div>"#,
        rows[0], rows[1], rows[2], buttons[0], buttons[1]
    )
}

/// The fetched-number card: keywords, the number itself, its digit sum,
/// an analysis link, and purchase / cancel buttons. Buttons call back
/// into the page through the exported globals.
pub fn number_display(number: &LuckyNumber, container_id: &str) -> String {
    let keywords = if number.keywords.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div style="font-size: 0.95rem; color: #475569; margin-bottom: 8px; font-weight: 300; line-height: 1.4; font-family: 'Kanit', sans-serif;">{}</div>"#,
            number.keywords.join(", ")
        )
    };
    let sum = number
        .sum
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or("-");
    let digits = &number.number;

    format!(
        concat!(
            r#"<div style="width: 100%; box-sizing: border-box; margin: 4px 0; padding: 22px 16px; background: #FFFBEB; border-top: 1px solid #FCD34D; border-bottom: 1px solid #FCD34D; text-align: center; box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.05); position: relative; overflow: hidden;">"#,
            "{keywords}",
            r#"<div style="font-weight: 300; font-size: 2.3rem; letter-spacing: 1.5px; margin: 10px 0 15px 0; font-family: 'Kanit', sans-serif; color: #D97706;">{digits}</div>"#,
            r#"<div style="display: flex; justify-content: center; align-items: center; gap: 10px; margin-bottom: 20px; font-family: 'Kanit', sans-serif;">"#,
            r#"<div style="font-size: 0.95rem; color: #92400E; background: rgba(251, 191, 36, 0.3); padding: 5px 14px; border-radius: 12px; font-weight: 300;">ผลรวม <b>{sum}</b></div>"#,
            r#"<a href="/number-analysis?number={digits}" target="_blank" style="text-decoration: none; font-size: 0.9rem; color: #4F46E5; font-weight: 400; background: #fff; padding: 5px 14px; border-radius: 12px; border: 1px solid #E5E7EB; border-bottom: 2px solid #D1D5DB; display: flex; align-items: center; gap: 6px; box-shadow: 0 2px 4px rgba(0,0,0,0.05); transition: all 0.2s; font-family: 'Kanit', sans-serif;">"#,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.1" stroke-linecap="round" stroke-linejoin="round"><circle cx="11" cy="11" r="8"></circle><line x1="21" y1="21" x2="16.65" y2="16.65"></line></svg>"#,
            "วิเคราะห์",
            "</a>",
            "</div>",
            r#"<div style="display: flex; gap: 14px; padding: 0 10px; font-family: 'Kanit', sans-serif;">"#,
            r#"<button onclick="window.openPurchaseModal('{digits}')" style="flex: 2; background: linear-gradient(135deg, #F59E0B 0%, #D97706 100%); color: white; border: none; padding: 14px; border-radius: 16px; font-weight: 400; cursor: pointer; font-size: 1rem; box-shadow: 0 4px 6px rgba(217, 119, 6, 0.2); transition: transform 0.1s; font-family: 'Kanit', sans-serif;" onmousedown="this.style.transform='scale(0.98)'" onmouseup="this.style.transform='scale(1)'">สั่งซื้อเลขนี้</button>"#,
            r#"<button onclick="window.revertLuckyNumber('{container_id}')" style="flex: 1; background: #fff; color: #64748B; border: 1px solid #E5E7EB; padding: 14px; border-radius: 16px; font-weight: 400; cursor: pointer; font-size: 0.95rem; font-family: 'Kanit', sans-serif;">ยกเลิก</button>"#,
            "</div>",
            "</div>",
        ),
        keywords = keywords,
        digits = digits,
        sum = sum,
        container_id = container_id,
    )
}

/// Shown when the endpoint has no number for the category.
pub fn not_found_notice() -> &'static str {
    r#"<div style="color: #64748B; padding: 20px; text-align: center; font-size: 0.9rem;">ไม่พบเบอร์มงคลในหมวดนี้</div>"#
}

/// Shown when the fetch itself failed.
pub fn error_notice() -> &'static str {
    r#"<div style="color: red; padding: 10px; text-align: center; font-size: 0.85rem;">เกิดข้อผิดพลาด กรุณาลองใหม่</div>"#
}

/// Inner markup of the chart's drop-shadow filter def.
pub fn drop_shadow_filter() -> &'static str {
    r#"<feGaussianBlur in="SourceAlpha" stdDeviation="3"/><feOffset dx="0" dy="2" result="offsetblur"/><feComponentTransfer><feFuncA type="linear" slope="0.3"/></feComponentTransfer><feMerge><feMergeNode/><feMergeNode in="SourceGraphic"/></feMerge>"#
}

/// Stops of the gold gradient kept in the defs for highlight accents.
pub fn gold_gradient_stops() -> &'static str {
    r#"<stop offset="0%" style="stop-color:#D97706;"/><stop offset="50%" style="stop-color:#FFD700;"/><stop offset="100%" style="stop-color:#B45309;"/>"#
}
