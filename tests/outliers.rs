//! 이상치 제거 정책 회귀 테스트.
use flowloop_analysis::flowloop::outliers::OutlierPolicy;

#[test]
fn iqr_rejects_extreme_value() {
    // 정렬값 [1,2,3,4,100]: Q1=2, Q3=4, IQR=2 → 경계 [-1, 7]
    let values = [1.0, 2.0, 3.0, 4.0, 100.0];
    let indices = [1, 2, 3, 4, 5];
    let (kept, idx) = OutlierPolicy::Iqr.apply(&values, &indices);
    assert_eq!(kept, vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(idx, vec![1, 2, 3, 4]);
}

#[test]
fn three_sigma_keeps_wide_small_sample() {
    // 같은 데이터라도 3σ 경계(약 [-95, 139])는 100을 남긴다.
    let values = [1.0, 2.0, 3.0, 4.0, 100.0];
    let indices = [1, 2, 3, 4, 5];
    let (kept, idx) = OutlierPolicy::ThreeSigma.apply(&values, &indices);
    assert_eq!(kept.len(), 5);
    assert_eq!(idx, vec![1, 2, 3, 4, 5]);
}

#[test]
fn three_sigma_rejects_far_value() {
    // 0 열아홉 개 + 100: 평균 5, 모σ≈21.8 → 상한 약 70.4
    let mut values = vec![0.0; 19];
    values.push(100.0);
    let indices: Vec<u32> = (1..=20).collect();
    let (kept, idx) = OutlierPolicy::ThreeSigma.apply(&values, &indices);
    assert_eq!(kept.len(), 19);
    assert!(kept.iter().all(|&v| v == 0.0));
    assert_eq!(idx, (1..=19).collect::<Vec<u32>>());
}

#[test]
fn second_pass_is_identity() {
    let values = [1.0, 2.0, 3.0, 4.0, 100.0];
    let indices = [1, 2, 3, 4, 5];
    for policy in [OutlierPolicy::Iqr, OutlierPolicy::ThreeSigma] {
        let (kept, idx) = policy.apply(&values, &indices);
        let (kept2, idx2) = policy.apply(&kept, &idx);
        assert_eq!(kept, kept2, "{policy:?}");
        assert_eq!(idx, idx2, "{policy:?}");
    }
}

#[test]
fn interior_rejection_preserves_order() {
    // 가운데 값이 빠져도 번호열은 원본 순서를 유지해야 한다.
    let values = [1.0, 50.0, 2.0, 3.0];
    let indices = [10, 20, 30, 40];
    let (kept, idx) = OutlierPolicy::Iqr.apply(&values, &indices);
    assert_eq!(kept, vec![1.0, 2.0, 3.0]);
    assert_eq!(idx, vec![10, 30, 40]);
    assert_eq!(kept.len(), idx.len());
}

#[test]
fn empty_input_stays_empty() {
    let (kept, idx) = OutlierPolicy::Iqr.apply(&[], &[]);
    assert!(kept.is_empty());
    assert!(idx.is_empty());
}
