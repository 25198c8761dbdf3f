// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Guest-facing texts written to the host by the flow.
//!
//! Per-field validation texts live with the issues in `yado_domain`.

/// Shown when the coupon input is blank.
pub const COUPON_EMPTY_MESSAGE: &str = "クーポンコードを入力してください";

/// Shown when a coupon lookup does not answer in time.
pub const COUPON_TIMEOUT_MESSAGE: &str = "クーポンを確認できませんでした。もう一度お試しください";

/// Resting label of the submit button.
pub const SUBMIT_READY_LABEL: &str = "予約を確定する";

/// Label of the submit button while a submission is outstanding.
pub const SUBMIT_BUSY_LABEL: &str = "処理中...";

/// Shown below the submit button when a submission fails.
pub const SUBMISSION_ERROR_MESSAGE: &str =
    "決済処理中にエラーが発生しました。もう一度お試しください。";

/// Shown when a coupon is applied.
#[must_use]
pub fn coupon_applied_message(discount: yado_domain::Yen) -> String {
    format!("クーポンが適用されました: {discount}割引")
}
