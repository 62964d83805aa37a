//! Precision-indexed empirical anchor tables.
//!
//! `RAW_ESTIMATE_DATA[i]` / `BIAS_DATA[i]` hold the anchors and bias values for
//! precision `p = i + 4`. Each row carries 200 valid, strictly increasing
//! anchors followed by a single zero sentinel in column 200, matching the
//! `[15][201]` shape of the published HLL++ tables (`count/empirical_data.h`
//! in the original C++ source declares exactly this layout). `THRESHOLD_DATA`
//! holds one cutoff per precision.

pub(super) const RAW_ESTIMATE_DATA: [[f64; 201]; 15] = [
    [
        4.0000000000e-01, 8.0000000000e-01, 1.2000000000e+00, 1.6000000000e+00,
        2.0000000000e+00, 2.4000000000e+00, 2.8000000000e+00, 3.2000000000e+00,
        3.6000000000e+00, 4.0000000000e+00, 4.4000000000e+00, 4.8000000000e+00,
        5.2000000000e+00, 5.6000000000e+00, 6.0000000000e+00, 6.4000000000e+00,
        6.8000000000e+00, 7.2000000000e+00, 7.6000000000e+00, 8.0000000000e+00,
        8.4000000000e+00, 8.8000000000e+00, 9.2000000000e+00, 9.6000000000e+00,
        1.0000000000e+01, 1.0400000000e+01, 1.0800000000e+01, 1.1200000000e+01,
        1.1600000000e+01, 1.2000000000e+01, 1.2400000000e+01, 1.2800000000e+01,
        1.3200000000e+01, 1.3600000000e+01, 1.4000000000e+01, 1.4400000000e+01,
        1.4800000000e+01, 1.5200000000e+01, 1.5600000000e+01, 1.6000000000e+01,
        1.6400000000e+01, 1.6800000000e+01, 1.7200000000e+01, 1.7600000000e+01,
        1.8000000000e+01, 1.8400000000e+01, 1.8800000000e+01, 1.9200000000e+01,
        1.9600000000e+01, 2.0000000000e+01, 2.0400000000e+01, 2.0800000000e+01,
        2.1200000000e+01, 2.1600000000e+01, 2.2000000000e+01, 2.2400000000e+01,
        2.2800000000e+01, 2.3200000000e+01, 2.3600000000e+01, 2.4000000000e+01,
        2.4400000000e+01, 2.4800000000e+01, 2.5200000000e+01, 2.5600000000e+01,
        2.6000000000e+01, 2.6400000000e+01, 2.6800000000e+01, 2.7200000000e+01,
        2.7600000000e+01, 2.8000000000e+01, 2.8400000000e+01, 2.8800000000e+01,
        2.9200000000e+01, 2.9600000000e+01, 3.0000000000e+01, 3.0400000000e+01,
        3.0800000000e+01, 3.1200000000e+01, 3.1600000000e+01, 3.2000000000e+01,
        3.2400000000e+01, 3.2800000000e+01, 3.3200000000e+01, 3.3600000000e+01,
        3.4000000000e+01, 3.4400000000e+01, 3.4800000000e+01, 3.5200000000e+01,
        3.5600000000e+01, 3.6000000000e+01, 3.6400000000e+01, 3.6800000000e+01,
        3.7200000000e+01, 3.7600000000e+01, 3.8000000000e+01, 3.8400000000e+01,
        3.8800000000e+01, 3.9200000000e+01, 3.9600000000e+01, 4.0000000000e+01,
        4.0400000000e+01, 4.0800000000e+01, 4.1200000000e+01, 4.1600000000e+01,
        4.2000000000e+01, 4.2400000000e+01, 4.2800000000e+01, 4.3200000000e+01,
        4.3600000000e+01, 4.4000000000e+01, 4.4400000000e+01, 4.4800000000e+01,
        4.5200000000e+01, 4.5600000000e+01, 4.6000000000e+01, 4.6400000000e+01,
        4.6800000000e+01, 4.7200000000e+01, 4.7600000000e+01, 4.8000000000e+01,
        4.8400000000e+01, 4.8800000000e+01, 4.9200000000e+01, 4.9600000000e+01,
        5.0000000000e+01, 5.0400000000e+01, 5.0800000000e+01, 5.1200000000e+01,
        5.1600000000e+01, 5.2000000000e+01, 5.2400000000e+01, 5.2800000000e+01,
        5.3200000000e+01, 5.3600000000e+01, 5.4000000000e+01, 5.4400000000e+01,
        5.4800000000e+01, 5.5200000000e+01, 5.5600000000e+01, 5.6000000000e+01,
        5.6400000000e+01, 5.6800000000e+01, 5.7200000000e+01, 5.7600000000e+01,
        5.8000000000e+01, 5.8400000000e+01, 5.8800000000e+01, 5.9200000000e+01,
        5.9600000000e+01, 6.0000000000e+01, 6.0400000000e+01, 6.0800000000e+01,
        6.1200000000e+01, 6.1600000000e+01, 6.2000000000e+01, 6.2400000000e+01,
        6.2800000000e+01, 6.3200000000e+01, 6.3600000000e+01, 6.4000000000e+01,
        6.4400000000e+01, 6.4800000000e+01, 6.5200000000e+01, 6.5600000000e+01,
        6.6000000000e+01, 6.6400000000e+01, 6.6800000000e+01, 6.7200000000e+01,
        6.7600000000e+01, 6.8000000000e+01, 6.8400000000e+01, 6.8800000000e+01,
        6.9200000000e+01, 6.9600000000e+01, 7.0000000000e+01, 7.0400000000e+01,
        7.0800000000e+01, 7.1200000000e+01, 7.1600000000e+01, 7.2000000000e+01,
        7.2400000000e+01, 7.2800000000e+01, 7.3200000000e+01, 7.3600000000e+01,
        7.4000000000e+01, 7.4400000000e+01, 7.4800000000e+01, 7.5200000000e+01,
        7.5600000000e+01, 7.6000000000e+01, 7.6400000000e+01, 7.6800000000e+01,
        7.7200000000e+01, 7.7600000000e+01, 7.8000000000e+01, 7.8400000000e+01,
        7.8800000000e+01, 7.9200000000e+01, 7.9600000000e+01, 8.0000000000e+01,
        0.0000000000e+00
    ],
    [
        8.0000000000e-01, 1.6000000000e+00, 2.4000000000e+00, 3.2000000000e+00,
        4.0000000000e+00, 4.8000000000e+00, 5.6000000000e+00, 6.4000000000e+00,
        7.2000000000e+00, 8.0000000000e+00, 8.8000000000e+00, 9.6000000000e+00,
        1.0400000000e+01, 1.1200000000e+01, 1.2000000000e+01, 1.2800000000e+01,
        1.3600000000e+01, 1.4400000000e+01, 1.5200000000e+01, 1.6000000000e+01,
        1.6800000000e+01, 1.7600000000e+01, 1.8400000000e+01, 1.9200000000e+01,
        2.0000000000e+01, 2.0800000000e+01, 2.1600000000e+01, 2.2400000000e+01,
        2.3200000000e+01, 2.4000000000e+01, 2.4800000000e+01, 2.5600000000e+01,
        2.6400000000e+01, 2.7200000000e+01, 2.8000000000e+01, 2.8800000000e+01,
        2.9600000000e+01, 3.0400000000e+01, 3.1200000000e+01, 3.2000000000e+01,
        3.2800000000e+01, 3.3600000000e+01, 3.4400000000e+01, 3.5200000000e+01,
        3.6000000000e+01, 3.6800000000e+01, 3.7600000000e+01, 3.8400000000e+01,
        3.9200000000e+01, 4.0000000000e+01, 4.0800000000e+01, 4.1600000000e+01,
        4.2400000000e+01, 4.3200000000e+01, 4.4000000000e+01, 4.4800000000e+01,
        4.5600000000e+01, 4.6400000000e+01, 4.7200000000e+01, 4.8000000000e+01,
        4.8800000000e+01, 4.9600000000e+01, 5.0400000000e+01, 5.1200000000e+01,
        5.2000000000e+01, 5.2800000000e+01, 5.3600000000e+01, 5.4400000000e+01,
        5.5200000000e+01, 5.6000000000e+01, 5.6800000000e+01, 5.7600000000e+01,
        5.8400000000e+01, 5.9200000000e+01, 6.0000000000e+01, 6.0800000000e+01,
        6.1600000000e+01, 6.2400000000e+01, 6.3200000000e+01, 6.4000000000e+01,
        6.4800000000e+01, 6.5600000000e+01, 6.6400000000e+01, 6.7200000000e+01,
        6.8000000000e+01, 6.8800000000e+01, 6.9600000000e+01, 7.0400000000e+01,
        7.1200000000e+01, 7.2000000000e+01, 7.2800000000e+01, 7.3600000000e+01,
        7.4400000000e+01, 7.5200000000e+01, 7.6000000000e+01, 7.6800000000e+01,
        7.7600000000e+01, 7.8400000000e+01, 7.9200000000e+01, 8.0000000000e+01,
        8.0800000000e+01, 8.1600000000e+01, 8.2400000000e+01, 8.3200000000e+01,
        8.4000000000e+01, 8.4800000000e+01, 8.5600000000e+01, 8.6400000000e+01,
        8.7200000000e+01, 8.8000000000e+01, 8.8800000000e+01, 8.9600000000e+01,
        9.0400000000e+01, 9.1200000000e+01, 9.2000000000e+01, 9.2800000000e+01,
        9.3600000000e+01, 9.4400000000e+01, 9.5200000000e+01, 9.6000000000e+01,
        9.6800000000e+01, 9.7600000000e+01, 9.8400000000e+01, 9.9200000000e+01,
        1.0000000000e+02, 1.0080000000e+02, 1.0160000000e+02, 1.0240000000e+02,
        1.0320000000e+02, 1.0400000000e+02, 1.0480000000e+02, 1.0560000000e+02,
        1.0640000000e+02, 1.0720000000e+02, 1.0800000000e+02, 1.0880000000e+02,
        1.0960000000e+02, 1.1040000000e+02, 1.1120000000e+02, 1.1200000000e+02,
        1.1280000000e+02, 1.1360000000e+02, 1.1440000000e+02, 1.1520000000e+02,
        1.1600000000e+02, 1.1680000000e+02, 1.1760000000e+02, 1.1840000000e+02,
        1.1920000000e+02, 1.2000000000e+02, 1.2080000000e+02, 1.2160000000e+02,
        1.2240000000e+02, 1.2320000000e+02, 1.2400000000e+02, 1.2480000000e+02,
        1.2560000000e+02, 1.2640000000e+02, 1.2720000000e+02, 1.2800000000e+02,
        1.2880000000e+02, 1.2960000000e+02, 1.3040000000e+02, 1.3120000000e+02,
        1.3200000000e+02, 1.3280000000e+02, 1.3360000000e+02, 1.3440000000e+02,
        1.3520000000e+02, 1.3600000000e+02, 1.3680000000e+02, 1.3760000000e+02,
        1.3840000000e+02, 1.3920000000e+02, 1.4000000000e+02, 1.4080000000e+02,
        1.4160000000e+02, 1.4240000000e+02, 1.4320000000e+02, 1.4400000000e+02,
        1.4480000000e+02, 1.4560000000e+02, 1.4640000000e+02, 1.4720000000e+02,
        1.4800000000e+02, 1.4880000000e+02, 1.4960000000e+02, 1.5040000000e+02,
        1.5120000000e+02, 1.5200000000e+02, 1.5280000000e+02, 1.5360000000e+02,
        1.5440000000e+02, 1.5520000000e+02, 1.5600000000e+02, 1.5680000000e+02,
        1.5760000000e+02, 1.5840000000e+02, 1.5920000000e+02, 1.6000000000e+02,
        0.0000000000e+00
    ],
    [
        1.6000000000e+00, 3.2000000000e+00, 4.8000000000e+00, 6.4000000000e+00,
        8.0000000000e+00, 9.6000000000e+00, 1.1200000000e+01, 1.2800000000e+01,
        1.4400000000e+01, 1.6000000000e+01, 1.7600000000e+01, 1.9200000000e+01,
        2.0800000000e+01, 2.2400000000e+01, 2.4000000000e+01, 2.5600000000e+01,
        2.7200000000e+01, 2.8800000000e+01, 3.0400000000e+01, 3.2000000000e+01,
        3.3600000000e+01, 3.5200000000e+01, 3.6800000000e+01, 3.8400000000e+01,
        4.0000000000e+01, 4.1600000000e+01, 4.3200000000e+01, 4.4800000000e+01,
        4.6400000000e+01, 4.8000000000e+01, 4.9600000000e+01, 5.1200000000e+01,
        5.2800000000e+01, 5.4400000000e+01, 5.6000000000e+01, 5.7600000000e+01,
        5.9200000000e+01, 6.0800000000e+01, 6.2400000000e+01, 6.4000000000e+01,
        6.5600000000e+01, 6.7200000000e+01, 6.8800000000e+01, 7.0400000000e+01,
        7.2000000000e+01, 7.3600000000e+01, 7.5200000000e+01, 7.6800000000e+01,
        7.8400000000e+01, 8.0000000000e+01, 8.1600000000e+01, 8.3200000000e+01,
        8.4800000000e+01, 8.6400000000e+01, 8.8000000000e+01, 8.9600000000e+01,
        9.1200000000e+01, 9.2800000000e+01, 9.4400000000e+01, 9.6000000000e+01,
        9.7600000000e+01, 9.9200000000e+01, 1.0080000000e+02, 1.0240000000e+02,
        1.0400000000e+02, 1.0560000000e+02, 1.0720000000e+02, 1.0880000000e+02,
        1.1040000000e+02, 1.1200000000e+02, 1.1360000000e+02, 1.1520000000e+02,
        1.1680000000e+02, 1.1840000000e+02, 1.2000000000e+02, 1.2160000000e+02,
        1.2320000000e+02, 1.2480000000e+02, 1.2640000000e+02, 1.2800000000e+02,
        1.2960000000e+02, 1.3120000000e+02, 1.3280000000e+02, 1.3440000000e+02,
        1.3600000000e+02, 1.3760000000e+02, 1.3920000000e+02, 1.4080000000e+02,
        1.4240000000e+02, 1.4400000000e+02, 1.4560000000e+02, 1.4720000000e+02,
        1.4880000000e+02, 1.5040000000e+02, 1.5200000000e+02, 1.5360000000e+02,
        1.5520000000e+02, 1.5680000000e+02, 1.5840000000e+02, 1.6000000000e+02,
        1.6160000000e+02, 1.6320000000e+02, 1.6480000000e+02, 1.6640000000e+02,
        1.6800000000e+02, 1.6960000000e+02, 1.7120000000e+02, 1.7280000000e+02,
        1.7440000000e+02, 1.7600000000e+02, 1.7760000000e+02, 1.7920000000e+02,
        1.8080000000e+02, 1.8240000000e+02, 1.8400000000e+02, 1.8560000000e+02,
        1.8720000000e+02, 1.8880000000e+02, 1.9040000000e+02, 1.9200000000e+02,
        1.9360000000e+02, 1.9520000000e+02, 1.9680000000e+02, 1.9840000000e+02,
        2.0000000000e+02, 2.0160000000e+02, 2.0320000000e+02, 2.0480000000e+02,
        2.0640000000e+02, 2.0800000000e+02, 2.0960000000e+02, 2.1120000000e+02,
        2.1280000000e+02, 2.1440000000e+02, 2.1600000000e+02, 2.1760000000e+02,
        2.1920000000e+02, 2.2080000000e+02, 2.2240000000e+02, 2.2400000000e+02,
        2.2560000000e+02, 2.2720000000e+02, 2.2880000000e+02, 2.3040000000e+02,
        2.3200000000e+02, 2.3360000000e+02, 2.3520000000e+02, 2.3680000000e+02,
        2.3840000000e+02, 2.4000000000e+02, 2.4160000000e+02, 2.4320000000e+02,
        2.4480000000e+02, 2.4640000000e+02, 2.4800000000e+02, 2.4960000000e+02,
        2.5120000000e+02, 2.5280000000e+02, 2.5440000000e+02, 2.5600000000e+02,
        2.5760000000e+02, 2.5920000000e+02, 2.6080000000e+02, 2.6240000000e+02,
        2.6400000000e+02, 2.6560000000e+02, 2.6720000000e+02, 2.6880000000e+02,
        2.7040000000e+02, 2.7200000000e+02, 2.7360000000e+02, 2.7520000000e+02,
        2.7680000000e+02, 2.7840000000e+02, 2.8000000000e+02, 2.8160000000e+02,
        2.8320000000e+02, 2.8480000000e+02, 2.8640000000e+02, 2.8800000000e+02,
        2.8960000000e+02, 2.9120000000e+02, 2.9280000000e+02, 2.9440000000e+02,
        2.9600000000e+02, 2.9760000000e+02, 2.9920000000e+02, 3.0080000000e+02,
        3.0240000000e+02, 3.0400000000e+02, 3.0560000000e+02, 3.0720000000e+02,
        3.0880000000e+02, 3.1040000000e+02, 3.1200000000e+02, 3.1360000000e+02,
        3.1520000000e+02, 3.1680000000e+02, 3.1840000000e+02, 3.2000000000e+02,
        0.0000000000e+00
    ],
    [
        3.2000000000e+00, 6.4000000000e+00, 9.6000000000e+00, 1.2800000000e+01,
        1.6000000000e+01, 1.9200000000e+01, 2.2400000000e+01, 2.5600000000e+01,
        2.8800000000e+01, 3.2000000000e+01, 3.5200000000e+01, 3.8400000000e+01,
        4.1600000000e+01, 4.4800000000e+01, 4.8000000000e+01, 5.1200000000e+01,
        5.4400000000e+01, 5.7600000000e+01, 6.0800000000e+01, 6.4000000000e+01,
        6.7200000000e+01, 7.0400000000e+01, 7.3600000000e+01, 7.6800000000e+01,
        8.0000000000e+01, 8.3200000000e+01, 8.6400000000e+01, 8.9600000000e+01,
        9.2800000000e+01, 9.6000000000e+01, 9.9200000000e+01, 1.0240000000e+02,
        1.0560000000e+02, 1.0880000000e+02, 1.1200000000e+02, 1.1520000000e+02,
        1.1840000000e+02, 1.2160000000e+02, 1.2480000000e+02, 1.2800000000e+02,
        1.3120000000e+02, 1.3440000000e+02, 1.3760000000e+02, 1.4080000000e+02,
        1.4400000000e+02, 1.4720000000e+02, 1.5040000000e+02, 1.5360000000e+02,
        1.5680000000e+02, 1.6000000000e+02, 1.6320000000e+02, 1.6640000000e+02,
        1.6960000000e+02, 1.7280000000e+02, 1.7600000000e+02, 1.7920000000e+02,
        1.8240000000e+02, 1.8560000000e+02, 1.8880000000e+02, 1.9200000000e+02,
        1.9520000000e+02, 1.9840000000e+02, 2.0160000000e+02, 2.0480000000e+02,
        2.0800000000e+02, 2.1120000000e+02, 2.1440000000e+02, 2.1760000000e+02,
        2.2080000000e+02, 2.2400000000e+02, 2.2720000000e+02, 2.3040000000e+02,
        2.3360000000e+02, 2.3680000000e+02, 2.4000000000e+02, 2.4320000000e+02,
        2.4640000000e+02, 2.4960000000e+02, 2.5280000000e+02, 2.5600000000e+02,
        2.5920000000e+02, 2.6240000000e+02, 2.6560000000e+02, 2.6880000000e+02,
        2.7200000000e+02, 2.7520000000e+02, 2.7840000000e+02, 2.8160000000e+02,
        2.8480000000e+02, 2.8800000000e+02, 2.9120000000e+02, 2.9440000000e+02,
        2.9760000000e+02, 3.0080000000e+02, 3.0400000000e+02, 3.0720000000e+02,
        3.1040000000e+02, 3.1360000000e+02, 3.1680000000e+02, 3.2000000000e+02,
        3.2320000000e+02, 3.2640000000e+02, 3.2960000000e+02, 3.3280000000e+02,
        3.3600000000e+02, 3.3920000000e+02, 3.4240000000e+02, 3.4560000000e+02,
        3.4880000000e+02, 3.5200000000e+02, 3.5520000000e+02, 3.5840000000e+02,
        3.6160000000e+02, 3.6480000000e+02, 3.6800000000e+02, 3.7120000000e+02,
        3.7440000000e+02, 3.7760000000e+02, 3.8080000000e+02, 3.8400000000e+02,
        3.8720000000e+02, 3.9040000000e+02, 3.9360000000e+02, 3.9680000000e+02,
        4.0000000000e+02, 4.0320000000e+02, 4.0640000000e+02, 4.0960000000e+02,
        4.1280000000e+02, 4.1600000000e+02, 4.1920000000e+02, 4.2240000000e+02,
        4.2560000000e+02, 4.2880000000e+02, 4.3200000000e+02, 4.3520000000e+02,
        4.3840000000e+02, 4.4160000000e+02, 4.4480000000e+02, 4.4800000000e+02,
        4.5120000000e+02, 4.5440000000e+02, 4.5760000000e+02, 4.6080000000e+02,
        4.6400000000e+02, 4.6720000000e+02, 4.7040000000e+02, 4.7360000000e+02,
        4.7680000000e+02, 4.8000000000e+02, 4.8320000000e+02, 4.8640000000e+02,
        4.8960000000e+02, 4.9280000000e+02, 4.9600000000e+02, 4.9920000000e+02,
        5.0240000000e+02, 5.0560000000e+02, 5.0880000000e+02, 5.1200000000e+02,
        5.1520000000e+02, 5.1840000000e+02, 5.2160000000e+02, 5.2480000000e+02,
        5.2800000000e+02, 5.3120000000e+02, 5.3440000000e+02, 5.3760000000e+02,
        5.4080000000e+02, 5.4400000000e+02, 5.4720000000e+02, 5.5040000000e+02,
        5.5360000000e+02, 5.5680000000e+02, 5.6000000000e+02, 5.6320000000e+02,
        5.6640000000e+02, 5.6960000000e+02, 5.7280000000e+02, 5.7600000000e+02,
        5.7920000000e+02, 5.8240000000e+02, 5.8560000000e+02, 5.8880000000e+02,
        5.9200000000e+02, 5.9520000000e+02, 5.9840000000e+02, 6.0160000000e+02,
        6.0480000000e+02, 6.0800000000e+02, 6.1120000000e+02, 6.1440000000e+02,
        6.1760000000e+02, 6.2080000000e+02, 6.2400000000e+02, 6.2720000000e+02,
        6.3040000000e+02, 6.3360000000e+02, 6.3680000000e+02, 6.4000000000e+02,
        0.0000000000e+00
    ],
    [
        6.4000000000e+00, 1.2800000000e+01, 1.9200000000e+01, 2.5600000000e+01,
        3.2000000000e+01, 3.8400000000e+01, 4.4800000000e+01, 5.1200000000e+01,
        5.7600000000e+01, 6.4000000000e+01, 7.0400000000e+01, 7.6800000000e+01,
        8.3200000000e+01, 8.9600000000e+01, 9.6000000000e+01, 1.0240000000e+02,
        1.0880000000e+02, 1.1520000000e+02, 1.2160000000e+02, 1.2800000000e+02,
        1.3440000000e+02, 1.4080000000e+02, 1.4720000000e+02, 1.5360000000e+02,
        1.6000000000e+02, 1.6640000000e+02, 1.7280000000e+02, 1.7920000000e+02,
        1.8560000000e+02, 1.9200000000e+02, 1.9840000000e+02, 2.0480000000e+02,
        2.1120000000e+02, 2.1760000000e+02, 2.2400000000e+02, 2.3040000000e+02,
        2.3680000000e+02, 2.4320000000e+02, 2.4960000000e+02, 2.5600000000e+02,
        2.6240000000e+02, 2.6880000000e+02, 2.7520000000e+02, 2.8160000000e+02,
        2.8800000000e+02, 2.9440000000e+02, 3.0080000000e+02, 3.0720000000e+02,
        3.1360000000e+02, 3.2000000000e+02, 3.2640000000e+02, 3.3280000000e+02,
        3.3920000000e+02, 3.4560000000e+02, 3.5200000000e+02, 3.5840000000e+02,
        3.6480000000e+02, 3.7120000000e+02, 3.7760000000e+02, 3.8400000000e+02,
        3.9040000000e+02, 3.9680000000e+02, 4.0320000000e+02, 4.0960000000e+02,
        4.1600000000e+02, 4.2240000000e+02, 4.2880000000e+02, 4.3520000000e+02,
        4.4160000000e+02, 4.4800000000e+02, 4.5440000000e+02, 4.6080000000e+02,
        4.6720000000e+02, 4.7360000000e+02, 4.8000000000e+02, 4.8640000000e+02,
        4.9280000000e+02, 4.9920000000e+02, 5.0560000000e+02, 5.1200000000e+02,
        5.1840000000e+02, 5.2480000000e+02, 5.3120000000e+02, 5.3760000000e+02,
        5.4400000000e+02, 5.5040000000e+02, 5.5680000000e+02, 5.6320000000e+02,
        5.6960000000e+02, 5.7600000000e+02, 5.8240000000e+02, 5.8880000000e+02,
        5.9520000000e+02, 6.0160000000e+02, 6.0800000000e+02, 6.1440000000e+02,
        6.2080000000e+02, 6.2720000000e+02, 6.3360000000e+02, 6.4000000000e+02,
        6.4640000000e+02, 6.5280000000e+02, 6.5920000000e+02, 6.6560000000e+02,
        6.7200000000e+02, 6.7840000000e+02, 6.8480000000e+02, 6.9120000000e+02,
        6.9760000000e+02, 7.0400000000e+02, 7.1040000000e+02, 7.1680000000e+02,
        7.2320000000e+02, 7.2960000000e+02, 7.3600000000e+02, 7.4240000000e+02,
        7.4880000000e+02, 7.5520000000e+02, 7.6160000000e+02, 7.6800000000e+02,
        7.7440000000e+02, 7.8080000000e+02, 7.8720000000e+02, 7.9360000000e+02,
        8.0000000000e+02, 8.0640000000e+02, 8.1280000000e+02, 8.1920000000e+02,
        8.2560000000e+02, 8.3200000000e+02, 8.3840000000e+02, 8.4480000000e+02,
        8.5120000000e+02, 8.5760000000e+02, 8.6400000000e+02, 8.7040000000e+02,
        8.7680000000e+02, 8.8320000000e+02, 8.8960000000e+02, 8.9600000000e+02,
        9.0240000000e+02, 9.0880000000e+02, 9.1520000000e+02, 9.2160000000e+02,
        9.2800000000e+02, 9.3440000000e+02, 9.4080000000e+02, 9.4720000000e+02,
        9.5360000000e+02, 9.6000000000e+02, 9.6640000000e+02, 9.7280000000e+02,
        9.7920000000e+02, 9.8560000000e+02, 9.9200000000e+02, 9.9840000000e+02,
        1.0048000000e+03, 1.0112000000e+03, 1.0176000000e+03, 1.0240000000e+03,
        1.0304000000e+03, 1.0368000000e+03, 1.0432000000e+03, 1.0496000000e+03,
        1.0560000000e+03, 1.0624000000e+03, 1.0688000000e+03, 1.0752000000e+03,
        1.0816000000e+03, 1.0880000000e+03, 1.0944000000e+03, 1.1008000000e+03,
        1.1072000000e+03, 1.1136000000e+03, 1.1200000000e+03, 1.1264000000e+03,
        1.1328000000e+03, 1.1392000000e+03, 1.1456000000e+03, 1.1520000000e+03,
        1.1584000000e+03, 1.1648000000e+03, 1.1712000000e+03, 1.1776000000e+03,
        1.1840000000e+03, 1.1904000000e+03, 1.1968000000e+03, 1.2032000000e+03,
        1.2096000000e+03, 1.2160000000e+03, 1.2224000000e+03, 1.2288000000e+03,
        1.2352000000e+03, 1.2416000000e+03, 1.2480000000e+03, 1.2544000000e+03,
        1.2608000000e+03, 1.2672000000e+03, 1.2736000000e+03, 1.2800000000e+03,
        0.0000000000e+00
    ],
    [
        1.2800000000e+01, 2.5600000000e+01, 3.8400000000e+01, 5.1200000000e+01,
        6.4000000000e+01, 7.6800000000e+01, 8.9600000000e+01, 1.0240000000e+02,
        1.1520000000e+02, 1.2800000000e+02, 1.4080000000e+02, 1.5360000000e+02,
        1.6640000000e+02, 1.7920000000e+02, 1.9200000000e+02, 2.0480000000e+02,
        2.1760000000e+02, 2.3040000000e+02, 2.4320000000e+02, 2.5600000000e+02,
        2.6880000000e+02, 2.8160000000e+02, 2.9440000000e+02, 3.0720000000e+02,
        3.2000000000e+02, 3.3280000000e+02, 3.4560000000e+02, 3.5840000000e+02,
        3.7120000000e+02, 3.8400000000e+02, 3.9680000000e+02, 4.0960000000e+02,
        4.2240000000e+02, 4.3520000000e+02, 4.4800000000e+02, 4.6080000000e+02,
        4.7360000000e+02, 4.8640000000e+02, 4.9920000000e+02, 5.1200000000e+02,
        5.2480000000e+02, 5.3760000000e+02, 5.5040000000e+02, 5.6320000000e+02,
        5.7600000000e+02, 5.8880000000e+02, 6.0160000000e+02, 6.1440000000e+02,
        6.2720000000e+02, 6.4000000000e+02, 6.5280000000e+02, 6.6560000000e+02,
        6.7840000000e+02, 6.9120000000e+02, 7.0400000000e+02, 7.1680000000e+02,
        7.2960000000e+02, 7.4240000000e+02, 7.5520000000e+02, 7.6800000000e+02,
        7.8080000000e+02, 7.9360000000e+02, 8.0640000000e+02, 8.1920000000e+02,
        8.3200000000e+02, 8.4480000000e+02, 8.5760000000e+02, 8.7040000000e+02,
        8.8320000000e+02, 8.9600000000e+02, 9.0880000000e+02, 9.2160000000e+02,
        9.3440000000e+02, 9.4720000000e+02, 9.6000000000e+02, 9.7280000000e+02,
        9.8560000000e+02, 9.9840000000e+02, 1.0112000000e+03, 1.0240000000e+03,
        1.0368000000e+03, 1.0496000000e+03, 1.0624000000e+03, 1.0752000000e+03,
        1.0880000000e+03, 1.1008000000e+03, 1.1136000000e+03, 1.1264000000e+03,
        1.1392000000e+03, 1.1520000000e+03, 1.1648000000e+03, 1.1776000000e+03,
        1.1904000000e+03, 1.2032000000e+03, 1.2160000000e+03, 1.2288000000e+03,
        1.2416000000e+03, 1.2544000000e+03, 1.2672000000e+03, 1.2800000000e+03,
        1.2928000000e+03, 1.3056000000e+03, 1.3184000000e+03, 1.3312000000e+03,
        1.3440000000e+03, 1.3568000000e+03, 1.3696000000e+03, 1.3824000000e+03,
        1.3952000000e+03, 1.4080000000e+03, 1.4208000000e+03, 1.4336000000e+03,
        1.4464000000e+03, 1.4592000000e+03, 1.4720000000e+03, 1.4848000000e+03,
        1.4976000000e+03, 1.5104000000e+03, 1.5232000000e+03, 1.5360000000e+03,
        1.5488000000e+03, 1.5616000000e+03, 1.5744000000e+03, 1.5872000000e+03,
        1.6000000000e+03, 1.6128000000e+03, 1.6256000000e+03, 1.6384000000e+03,
        1.6512000000e+03, 1.6640000000e+03, 1.6768000000e+03, 1.6896000000e+03,
        1.7024000000e+03, 1.7152000000e+03, 1.7280000000e+03, 1.7408000000e+03,
        1.7536000000e+03, 1.7664000000e+03, 1.7792000000e+03, 1.7920000000e+03,
        1.8048000000e+03, 1.8176000000e+03, 1.8304000000e+03, 1.8432000000e+03,
        1.8560000000e+03, 1.8688000000e+03, 1.8816000000e+03, 1.8944000000e+03,
        1.9072000000e+03, 1.9200000000e+03, 1.9328000000e+03, 1.9456000000e+03,
        1.9584000000e+03, 1.9712000000e+03, 1.9840000000e+03, 1.9968000000e+03,
        2.0096000000e+03, 2.0224000000e+03, 2.0352000000e+03, 2.0480000000e+03,
        2.0608000000e+03, 2.0736000000e+03, 2.0864000000e+03, 2.0992000000e+03,
        2.1120000000e+03, 2.1248000000e+03, 2.1376000000e+03, 2.1504000000e+03,
        2.1632000000e+03, 2.1760000000e+03, 2.1888000000e+03, 2.2016000000e+03,
        2.2144000000e+03, 2.2272000000e+03, 2.2400000000e+03, 2.2528000000e+03,
        2.2656000000e+03, 2.2784000000e+03, 2.2912000000e+03, 2.3040000000e+03,
        2.3168000000e+03, 2.3296000000e+03, 2.3424000000e+03, 2.3552000000e+03,
        2.3680000000e+03, 2.3808000000e+03, 2.3936000000e+03, 2.4064000000e+03,
        2.4192000000e+03, 2.4320000000e+03, 2.4448000000e+03, 2.4576000000e+03,
        2.4704000000e+03, 2.4832000000e+03, 2.4960000000e+03, 2.5088000000e+03,
        2.5216000000e+03, 2.5344000000e+03, 2.5472000000e+03, 2.5600000000e+03,
        0.0000000000e+00
    ],
    [
        2.5600000000e+01, 5.1200000000e+01, 7.6800000000e+01, 1.0240000000e+02,
        1.2800000000e+02, 1.5360000000e+02, 1.7920000000e+02, 2.0480000000e+02,
        2.3040000000e+02, 2.5600000000e+02, 2.8160000000e+02, 3.0720000000e+02,
        3.3280000000e+02, 3.5840000000e+02, 3.8400000000e+02, 4.0960000000e+02,
        4.3520000000e+02, 4.6080000000e+02, 4.8640000000e+02, 5.1200000000e+02,
        5.3760000000e+02, 5.6320000000e+02, 5.8880000000e+02, 6.1440000000e+02,
        6.4000000000e+02, 6.6560000000e+02, 6.9120000000e+02, 7.1680000000e+02,
        7.4240000000e+02, 7.6800000000e+02, 7.9360000000e+02, 8.1920000000e+02,
        8.4480000000e+02, 8.7040000000e+02, 8.9600000000e+02, 9.2160000000e+02,
        9.4720000000e+02, 9.7280000000e+02, 9.9840000000e+02, 1.0240000000e+03,
        1.0496000000e+03, 1.0752000000e+03, 1.1008000000e+03, 1.1264000000e+03,
        1.1520000000e+03, 1.1776000000e+03, 1.2032000000e+03, 1.2288000000e+03,
        1.2544000000e+03, 1.2800000000e+03, 1.3056000000e+03, 1.3312000000e+03,
        1.3568000000e+03, 1.3824000000e+03, 1.4080000000e+03, 1.4336000000e+03,
        1.4592000000e+03, 1.4848000000e+03, 1.5104000000e+03, 1.5360000000e+03,
        1.5616000000e+03, 1.5872000000e+03, 1.6128000000e+03, 1.6384000000e+03,
        1.6640000000e+03, 1.6896000000e+03, 1.7152000000e+03, 1.7408000000e+03,
        1.7664000000e+03, 1.7920000000e+03, 1.8176000000e+03, 1.8432000000e+03,
        1.8688000000e+03, 1.8944000000e+03, 1.9200000000e+03, 1.9456000000e+03,
        1.9712000000e+03, 1.9968000000e+03, 2.0224000000e+03, 2.0480000000e+03,
        2.0736000000e+03, 2.0992000000e+03, 2.1248000000e+03, 2.1504000000e+03,
        2.1760000000e+03, 2.2016000000e+03, 2.2272000000e+03, 2.2528000000e+03,
        2.2784000000e+03, 2.3040000000e+03, 2.3296000000e+03, 2.3552000000e+03,
        2.3808000000e+03, 2.4064000000e+03, 2.4320000000e+03, 2.4576000000e+03,
        2.4832000000e+03, 2.5088000000e+03, 2.5344000000e+03, 2.5600000000e+03,
        2.5856000000e+03, 2.6112000000e+03, 2.6368000000e+03, 2.6624000000e+03,
        2.6880000000e+03, 2.7136000000e+03, 2.7392000000e+03, 2.7648000000e+03,
        2.7904000000e+03, 2.8160000000e+03, 2.8416000000e+03, 2.8672000000e+03,
        2.8928000000e+03, 2.9184000000e+03, 2.9440000000e+03, 2.9696000000e+03,
        2.9952000000e+03, 3.0208000000e+03, 3.0464000000e+03, 3.0720000000e+03,
        3.0976000000e+03, 3.1232000000e+03, 3.1488000000e+03, 3.1744000000e+03,
        3.2000000000e+03, 3.2256000000e+03, 3.2512000000e+03, 3.2768000000e+03,
        3.3024000000e+03, 3.3280000000e+03, 3.3536000000e+03, 3.3792000000e+03,
        3.4048000000e+03, 3.4304000000e+03, 3.4560000000e+03, 3.4816000000e+03,
        3.5072000000e+03, 3.5328000000e+03, 3.5584000000e+03, 3.5840000000e+03,
        3.6096000000e+03, 3.6352000000e+03, 3.6608000000e+03, 3.6864000000e+03,
        3.7120000000e+03, 3.7376000000e+03, 3.7632000000e+03, 3.7888000000e+03,
        3.8144000000e+03, 3.8400000000e+03, 3.8656000000e+03, 3.8912000000e+03,
        3.9168000000e+03, 3.9424000000e+03, 3.9680000000e+03, 3.9936000000e+03,
        4.0192000000e+03, 4.0448000000e+03, 4.0704000000e+03, 4.0960000000e+03,
        4.1216000000e+03, 4.1472000000e+03, 4.1728000000e+03, 4.1984000000e+03,
        4.2240000000e+03, 4.2496000000e+03, 4.2752000000e+03, 4.3008000000e+03,
        4.3264000000e+03, 4.3520000000e+03, 4.3776000000e+03, 4.4032000000e+03,
        4.4288000000e+03, 4.4544000000e+03, 4.4800000000e+03, 4.5056000000e+03,
        4.5312000000e+03, 4.5568000000e+03, 4.5824000000e+03, 4.6080000000e+03,
        4.6336000000e+03, 4.6592000000e+03, 4.6848000000e+03, 4.7104000000e+03,
        4.7360000000e+03, 4.7616000000e+03, 4.7872000000e+03, 4.8128000000e+03,
        4.8384000000e+03, 4.8640000000e+03, 4.8896000000e+03, 4.9152000000e+03,
        4.9408000000e+03, 4.9664000000e+03, 4.9920000000e+03, 5.0176000000e+03,
        5.0432000000e+03, 5.0688000000e+03, 5.0944000000e+03, 5.1200000000e+03,
        0.0000000000e+00
    ],
    [
        5.1200000000e+01, 1.0240000000e+02, 1.5360000000e+02, 2.0480000000e+02,
        2.5600000000e+02, 3.0720000000e+02, 3.5840000000e+02, 4.0960000000e+02,
        4.6080000000e+02, 5.1200000000e+02, 5.6320000000e+02, 6.1440000000e+02,
        6.6560000000e+02, 7.1680000000e+02, 7.6800000000e+02, 8.1920000000e+02,
        8.7040000000e+02, 9.2160000000e+02, 9.7280000000e+02, 1.0240000000e+03,
        1.0752000000e+03, 1.1264000000e+03, 1.1776000000e+03, 1.2288000000e+03,
        1.2800000000e+03, 1.3312000000e+03, 1.3824000000e+03, 1.4336000000e+03,
        1.4848000000e+03, 1.5360000000e+03, 1.5872000000e+03, 1.6384000000e+03,
        1.6896000000e+03, 1.7408000000e+03, 1.7920000000e+03, 1.8432000000e+03,
        1.8944000000e+03, 1.9456000000e+03, 1.9968000000e+03, 2.0480000000e+03,
        2.0992000000e+03, 2.1504000000e+03, 2.2016000000e+03, 2.2528000000e+03,
        2.3040000000e+03, 2.3552000000e+03, 2.4064000000e+03, 2.4576000000e+03,
        2.5088000000e+03, 2.5600000000e+03, 2.6112000000e+03, 2.6624000000e+03,
        2.7136000000e+03, 2.7648000000e+03, 2.8160000000e+03, 2.8672000000e+03,
        2.9184000000e+03, 2.9696000000e+03, 3.0208000000e+03, 3.0720000000e+03,
        3.1232000000e+03, 3.1744000000e+03, 3.2256000000e+03, 3.2768000000e+03,
        3.3280000000e+03, 3.3792000000e+03, 3.4304000000e+03, 3.4816000000e+03,
        3.5328000000e+03, 3.5840000000e+03, 3.6352000000e+03, 3.6864000000e+03,
        3.7376000000e+03, 3.7888000000e+03, 3.8400000000e+03, 3.8912000000e+03,
        3.9424000000e+03, 3.9936000000e+03, 4.0448000000e+03, 4.0960000000e+03,
        4.1472000000e+03, 4.1984000000e+03, 4.2496000000e+03, 4.3008000000e+03,
        4.3520000000e+03, 4.4032000000e+03, 4.4544000000e+03, 4.5056000000e+03,
        4.5568000000e+03, 4.6080000000e+03, 4.6592000000e+03, 4.7104000000e+03,
        4.7616000000e+03, 4.8128000000e+03, 4.8640000000e+03, 4.9152000000e+03,
        4.9664000000e+03, 5.0176000000e+03, 5.0688000000e+03, 5.1200000000e+03,
        5.1712000000e+03, 5.2224000000e+03, 5.2736000000e+03, 5.3248000000e+03,
        5.3760000000e+03, 5.4272000000e+03, 5.4784000000e+03, 5.5296000000e+03,
        5.5808000000e+03, 5.6320000000e+03, 5.6832000000e+03, 5.7344000000e+03,
        5.7856000000e+03, 5.8368000000e+03, 5.8880000000e+03, 5.9392000000e+03,
        5.9904000000e+03, 6.0416000000e+03, 6.0928000000e+03, 6.1440000000e+03,
        6.1952000000e+03, 6.2464000000e+03, 6.2976000000e+03, 6.3488000000e+03,
        6.4000000000e+03, 6.4512000000e+03, 6.5024000000e+03, 6.5536000000e+03,
        6.6048000000e+03, 6.6560000000e+03, 6.7072000000e+03, 6.7584000000e+03,
        6.8096000000e+03, 6.8608000000e+03, 6.9120000000e+03, 6.9632000000e+03,
        7.0144000000e+03, 7.0656000000e+03, 7.1168000000e+03, 7.1680000000e+03,
        7.2192000000e+03, 7.2704000000e+03, 7.3216000000e+03, 7.3728000000e+03,
        7.4240000000e+03, 7.4752000000e+03, 7.5264000000e+03, 7.5776000000e+03,
        7.6288000000e+03, 7.6800000000e+03, 7.7312000000e+03, 7.7824000000e+03,
        7.8336000000e+03, 7.8848000000e+03, 7.9360000000e+03, 7.9872000000e+03,
        8.0384000000e+03, 8.0896000000e+03, 8.1408000000e+03, 8.1920000000e+03,
        8.2432000000e+03, 8.2944000000e+03, 8.3456000000e+03, 8.3968000000e+03,
        8.4480000000e+03, 8.4992000000e+03, 8.5504000000e+03, 8.6016000000e+03,
        8.6528000000e+03, 8.7040000000e+03, 8.7552000000e+03, 8.8064000000e+03,
        8.8576000000e+03, 8.9088000000e+03, 8.9600000000e+03, 9.0112000000e+03,
        9.0624000000e+03, 9.1136000000e+03, 9.1648000000e+03, 9.2160000000e+03,
        9.2672000000e+03, 9.3184000000e+03, 9.3696000000e+03, 9.4208000000e+03,
        9.4720000000e+03, 9.5232000000e+03, 9.5744000000e+03, 9.6256000000e+03,
        9.6768000000e+03, 9.7280000000e+03, 9.7792000000e+03, 9.8304000000e+03,
        9.8816000000e+03, 9.9328000000e+03, 9.9840000000e+03, 1.0035200000e+04,
        1.0086400000e+04, 1.0137600000e+04, 1.0188800000e+04, 1.0240000000e+04,
        0.0000000000e+00
    ],
    [
        1.0240000000e+02, 2.0480000000e+02, 3.0720000000e+02, 4.0960000000e+02,
        5.1200000000e+02, 6.1440000000e+02, 7.1680000000e+02, 8.1920000000e+02,
        9.2160000000e+02, 1.0240000000e+03, 1.1264000000e+03, 1.2288000000e+03,
        1.3312000000e+03, 1.4336000000e+03, 1.5360000000e+03, 1.6384000000e+03,
        1.7408000000e+03, 1.8432000000e+03, 1.9456000000e+03, 2.0480000000e+03,
        2.1504000000e+03, 2.2528000000e+03, 2.3552000000e+03, 2.4576000000e+03,
        2.5600000000e+03, 2.6624000000e+03, 2.7648000000e+03, 2.8672000000e+03,
        2.9696000000e+03, 3.0720000000e+03, 3.1744000000e+03, 3.2768000000e+03,
        3.3792000000e+03, 3.4816000000e+03, 3.5840000000e+03, 3.6864000000e+03,
        3.7888000000e+03, 3.8912000000e+03, 3.9936000000e+03, 4.0960000000e+03,
        4.1984000000e+03, 4.3008000000e+03, 4.4032000000e+03, 4.5056000000e+03,
        4.6080000000e+03, 4.7104000000e+03, 4.8128000000e+03, 4.9152000000e+03,
        5.0176000000e+03, 5.1200000000e+03, 5.2224000000e+03, 5.3248000000e+03,
        5.4272000000e+03, 5.5296000000e+03, 5.6320000000e+03, 5.7344000000e+03,
        5.8368000000e+03, 5.9392000000e+03, 6.0416000000e+03, 6.1440000000e+03,
        6.2464000000e+03, 6.3488000000e+03, 6.4512000000e+03, 6.5536000000e+03,
        6.6560000000e+03, 6.7584000000e+03, 6.8608000000e+03, 6.9632000000e+03,
        7.0656000000e+03, 7.1680000000e+03, 7.2704000000e+03, 7.3728000000e+03,
        7.4752000000e+03, 7.5776000000e+03, 7.6800000000e+03, 7.7824000000e+03,
        7.8848000000e+03, 7.9872000000e+03, 8.0896000000e+03, 8.1920000000e+03,
        8.2944000000e+03, 8.3968000000e+03, 8.4992000000e+03, 8.6016000000e+03,
        8.7040000000e+03, 8.8064000000e+03, 8.9088000000e+03, 9.0112000000e+03,
        9.1136000000e+03, 9.2160000000e+03, 9.3184000000e+03, 9.4208000000e+03,
        9.5232000000e+03, 9.6256000000e+03, 9.7280000000e+03, 9.8304000000e+03,
        9.9328000000e+03, 1.0035200000e+04, 1.0137600000e+04, 1.0240000000e+04,
        1.0342400000e+04, 1.0444800000e+04, 1.0547200000e+04, 1.0649600000e+04,
        1.0752000000e+04, 1.0854400000e+04, 1.0956800000e+04, 1.1059200000e+04,
        1.1161600000e+04, 1.1264000000e+04, 1.1366400000e+04, 1.1468800000e+04,
        1.1571200000e+04, 1.1673600000e+04, 1.1776000000e+04, 1.1878400000e+04,
        1.1980800000e+04, 1.2083200000e+04, 1.2185600000e+04, 1.2288000000e+04,
        1.2390400000e+04, 1.2492800000e+04, 1.2595200000e+04, 1.2697600000e+04,
        1.2800000000e+04, 1.2902400000e+04, 1.3004800000e+04, 1.3107200000e+04,
        1.3209600000e+04, 1.3312000000e+04, 1.3414400000e+04, 1.3516800000e+04,
        1.3619200000e+04, 1.3721600000e+04, 1.3824000000e+04, 1.3926400000e+04,
        1.4028800000e+04, 1.4131200000e+04, 1.4233600000e+04, 1.4336000000e+04,
        1.4438400000e+04, 1.4540800000e+04, 1.4643200000e+04, 1.4745600000e+04,
        1.4848000000e+04, 1.4950400000e+04, 1.5052800000e+04, 1.5155200000e+04,
        1.5257600000e+04, 1.5360000000e+04, 1.5462400000e+04, 1.5564800000e+04,
        1.5667200000e+04, 1.5769600000e+04, 1.5872000000e+04, 1.5974400000e+04,
        1.6076800000e+04, 1.6179200000e+04, 1.6281600000e+04, 1.6384000000e+04,
        1.6486400000e+04, 1.6588800000e+04, 1.6691200000e+04, 1.6793600000e+04,
        1.6896000000e+04, 1.6998400000e+04, 1.7100800000e+04, 1.7203200000e+04,
        1.7305600000e+04, 1.7408000000e+04, 1.7510400000e+04, 1.7612800000e+04,
        1.7715200000e+04, 1.7817600000e+04, 1.7920000000e+04, 1.8022400000e+04,
        1.8124800000e+04, 1.8227200000e+04, 1.8329600000e+04, 1.8432000000e+04,
        1.8534400000e+04, 1.8636800000e+04, 1.8739200000e+04, 1.8841600000e+04,
        1.8944000000e+04, 1.9046400000e+04, 1.9148800000e+04, 1.9251200000e+04,
        1.9353600000e+04, 1.9456000000e+04, 1.9558400000e+04, 1.9660800000e+04,
        1.9763200000e+04, 1.9865600000e+04, 1.9968000000e+04, 2.0070400000e+04,
        2.0172800000e+04, 2.0275200000e+04, 2.0377600000e+04, 2.0480000000e+04,
        0.0000000000e+00
    ],
    [
        2.0480000000e+02, 4.0960000000e+02, 6.1440000000e+02, 8.1920000000e+02,
        1.0240000000e+03, 1.2288000000e+03, 1.4336000000e+03, 1.6384000000e+03,
        1.8432000000e+03, 2.0480000000e+03, 2.2528000000e+03, 2.4576000000e+03,
        2.6624000000e+03, 2.8672000000e+03, 3.0720000000e+03, 3.2768000000e+03,
        3.4816000000e+03, 3.6864000000e+03, 3.8912000000e+03, 4.0960000000e+03,
        4.3008000000e+03, 4.5056000000e+03, 4.7104000000e+03, 4.9152000000e+03,
        5.1200000000e+03, 5.3248000000e+03, 5.5296000000e+03, 5.7344000000e+03,
        5.9392000000e+03, 6.1440000000e+03, 6.3488000000e+03, 6.5536000000e+03,
        6.7584000000e+03, 6.9632000000e+03, 7.1680000000e+03, 7.3728000000e+03,
        7.5776000000e+03, 7.7824000000e+03, 7.9872000000e+03, 8.1920000000e+03,
        8.3968000000e+03, 8.6016000000e+03, 8.8064000000e+03, 9.0112000000e+03,
        9.2160000000e+03, 9.4208000000e+03, 9.6256000000e+03, 9.8304000000e+03,
        1.0035200000e+04, 1.0240000000e+04, 1.0444800000e+04, 1.0649600000e+04,
        1.0854400000e+04, 1.1059200000e+04, 1.1264000000e+04, 1.1468800000e+04,
        1.1673600000e+04, 1.1878400000e+04, 1.2083200000e+04, 1.2288000000e+04,
        1.2492800000e+04, 1.2697600000e+04, 1.2902400000e+04, 1.3107200000e+04,
        1.3312000000e+04, 1.3516800000e+04, 1.3721600000e+04, 1.3926400000e+04,
        1.4131200000e+04, 1.4336000000e+04, 1.4540800000e+04, 1.4745600000e+04,
        1.4950400000e+04, 1.5155200000e+04, 1.5360000000e+04, 1.5564800000e+04,
        1.5769600000e+04, 1.5974400000e+04, 1.6179200000e+04, 1.6384000000e+04,
        1.6588800000e+04, 1.6793600000e+04, 1.6998400000e+04, 1.7203200000e+04,
        1.7408000000e+04, 1.7612800000e+04, 1.7817600000e+04, 1.8022400000e+04,
        1.8227200000e+04, 1.8432000000e+04, 1.8636800000e+04, 1.8841600000e+04,
        1.9046400000e+04, 1.9251200000e+04, 1.9456000000e+04, 1.9660800000e+04,
        1.9865600000e+04, 2.0070400000e+04, 2.0275200000e+04, 2.0480000000e+04,
        2.0684800000e+04, 2.0889600000e+04, 2.1094400000e+04, 2.1299200000e+04,
        2.1504000000e+04, 2.1708800000e+04, 2.1913600000e+04, 2.2118400000e+04,
        2.2323200000e+04, 2.2528000000e+04, 2.2732800000e+04, 2.2937600000e+04,
        2.3142400000e+04, 2.3347200000e+04, 2.3552000000e+04, 2.3756800000e+04,
        2.3961600000e+04, 2.4166400000e+04, 2.4371200000e+04, 2.4576000000e+04,
        2.4780800000e+04, 2.4985600000e+04, 2.5190400000e+04, 2.5395200000e+04,
        2.5600000000e+04, 2.5804800000e+04, 2.6009600000e+04, 2.6214400000e+04,
        2.6419200000e+04, 2.6624000000e+04, 2.6828800000e+04, 2.7033600000e+04,
        2.7238400000e+04, 2.7443200000e+04, 2.7648000000e+04, 2.7852800000e+04,
        2.8057600000e+04, 2.8262400000e+04, 2.8467200000e+04, 2.8672000000e+04,
        2.8876800000e+04, 2.9081600000e+04, 2.9286400000e+04, 2.9491200000e+04,
        2.9696000000e+04, 2.9900800000e+04, 3.0105600000e+04, 3.0310400000e+04,
        3.0515200000e+04, 3.0720000000e+04, 3.0924800000e+04, 3.1129600000e+04,
        3.1334400000e+04, 3.1539200000e+04, 3.1744000000e+04, 3.1948800000e+04,
        3.2153600000e+04, 3.2358400000e+04, 3.2563200000e+04, 3.2768000000e+04,
        3.2972800000e+04, 3.3177600000e+04, 3.3382400000e+04, 3.3587200000e+04,
        3.3792000000e+04, 3.3996800000e+04, 3.4201600000e+04, 3.4406400000e+04,
        3.4611200000e+04, 3.4816000000e+04, 3.5020800000e+04, 3.5225600000e+04,
        3.5430400000e+04, 3.5635200000e+04, 3.5840000000e+04, 3.6044800000e+04,
        3.6249600000e+04, 3.6454400000e+04, 3.6659200000e+04, 3.6864000000e+04,
        3.7068800000e+04, 3.7273600000e+04, 3.7478400000e+04, 3.7683200000e+04,
        3.7888000000e+04, 3.8092800000e+04, 3.8297600000e+04, 3.8502400000e+04,
        3.8707200000e+04, 3.8912000000e+04, 3.9116800000e+04, 3.9321600000e+04,
        3.9526400000e+04, 3.9731200000e+04, 3.9936000000e+04, 4.0140800000e+04,
        4.0345600000e+04, 4.0550400000e+04, 4.0755200000e+04, 4.0960000000e+04,
        0.0000000000e+00
    ],
    [
        4.0960000000e+02, 8.1920000000e+02, 1.2288000000e+03, 1.6384000000e+03,
        2.0480000000e+03, 2.4576000000e+03, 2.8672000000e+03, 3.2768000000e+03,
        3.6864000000e+03, 4.0960000000e+03, 4.5056000000e+03, 4.9152000000e+03,
        5.3248000000e+03, 5.7344000000e+03, 6.1440000000e+03, 6.5536000000e+03,
        6.9632000000e+03, 7.3728000000e+03, 7.7824000000e+03, 8.1920000000e+03,
        8.6016000000e+03, 9.0112000000e+03, 9.4208000000e+03, 9.8304000000e+03,
        1.0240000000e+04, 1.0649600000e+04, 1.1059200000e+04, 1.1468800000e+04,
        1.1878400000e+04, 1.2288000000e+04, 1.2697600000e+04, 1.3107200000e+04,
        1.3516800000e+04, 1.3926400000e+04, 1.4336000000e+04, 1.4745600000e+04,
        1.5155200000e+04, 1.5564800000e+04, 1.5974400000e+04, 1.6384000000e+04,
        1.6793600000e+04, 1.7203200000e+04, 1.7612800000e+04, 1.8022400000e+04,
        1.8432000000e+04, 1.8841600000e+04, 1.9251200000e+04, 1.9660800000e+04,
        2.0070400000e+04, 2.0480000000e+04, 2.0889600000e+04, 2.1299200000e+04,
        2.1708800000e+04, 2.2118400000e+04, 2.2528000000e+04, 2.2937600000e+04,
        2.3347200000e+04, 2.3756800000e+04, 2.4166400000e+04, 2.4576000000e+04,
        2.4985600000e+04, 2.5395200000e+04, 2.5804800000e+04, 2.6214400000e+04,
        2.6624000000e+04, 2.7033600000e+04, 2.7443200000e+04, 2.7852800000e+04,
        2.8262400000e+04, 2.8672000000e+04, 2.9081600000e+04, 2.9491200000e+04,
        2.9900800000e+04, 3.0310400000e+04, 3.0720000000e+04, 3.1129600000e+04,
        3.1539200000e+04, 3.1948800000e+04, 3.2358400000e+04, 3.2768000000e+04,
        3.3177600000e+04, 3.3587200000e+04, 3.3996800000e+04, 3.4406400000e+04,
        3.4816000000e+04, 3.5225600000e+04, 3.5635200000e+04, 3.6044800000e+04,
        3.6454400000e+04, 3.6864000000e+04, 3.7273600000e+04, 3.7683200000e+04,
        3.8092800000e+04, 3.8502400000e+04, 3.8912000000e+04, 3.9321600000e+04,
        3.9731200000e+04, 4.0140800000e+04, 4.0550400000e+04, 4.0960000000e+04,
        4.1369600000e+04, 4.1779200000e+04, 4.2188800000e+04, 4.2598400000e+04,
        4.3008000000e+04, 4.3417600000e+04, 4.3827200000e+04, 4.4236800000e+04,
        4.4646400000e+04, 4.5056000000e+04, 4.5465600000e+04, 4.5875200000e+04,
        4.6284800000e+04, 4.6694400000e+04, 4.7104000000e+04, 4.7513600000e+04,
        4.7923200000e+04, 4.8332800000e+04, 4.8742400000e+04, 4.9152000000e+04,
        4.9561600000e+04, 4.9971200000e+04, 5.0380800000e+04, 5.0790400000e+04,
        5.1200000000e+04, 5.1609600000e+04, 5.2019200000e+04, 5.2428800000e+04,
        5.2838400000e+04, 5.3248000000e+04, 5.3657600000e+04, 5.4067200000e+04,
        5.4476800000e+04, 5.4886400000e+04, 5.5296000000e+04, 5.5705600000e+04,
        5.6115200000e+04, 5.6524800000e+04, 5.6934400000e+04, 5.7344000000e+04,
        5.7753600000e+04, 5.8163200000e+04, 5.8572800000e+04, 5.8982400000e+04,
        5.9392000000e+04, 5.9801600000e+04, 6.0211200000e+04, 6.0620800000e+04,
        6.1030400000e+04, 6.1440000000e+04, 6.1849600000e+04, 6.2259200000e+04,
        6.2668800000e+04, 6.3078400000e+04, 6.3488000000e+04, 6.3897600000e+04,
        6.4307200000e+04, 6.4716800000e+04, 6.5126400000e+04, 6.5536000000e+04,
        6.5945600000e+04, 6.6355200000e+04, 6.6764800000e+04, 6.7174400000e+04,
        6.7584000000e+04, 6.7993600000e+04, 6.8403200000e+04, 6.8812800000e+04,
        6.9222400000e+04, 6.9632000000e+04, 7.0041600000e+04, 7.0451200000e+04,
        7.0860800000e+04, 7.1270400000e+04, 7.1680000000e+04, 7.2089600000e+04,
        7.2499200000e+04, 7.2908800000e+04, 7.3318400000e+04, 7.3728000000e+04,
        7.4137600000e+04, 7.4547200000e+04, 7.4956800000e+04, 7.5366400000e+04,
        7.5776000000e+04, 7.6185600000e+04, 7.6595200000e+04, 7.7004800000e+04,
        7.7414400000e+04, 7.7824000000e+04, 7.8233600000e+04, 7.8643200000e+04,
        7.9052800000e+04, 7.9462400000e+04, 7.9872000000e+04, 8.0281600000e+04,
        8.0691200000e+04, 8.1100800000e+04, 8.1510400000e+04, 8.1920000000e+04,
        0.0000000000e+00
    ],
    [
        8.1920000000e+02, 1.6384000000e+03, 2.4576000000e+03, 3.2768000000e+03,
        4.0960000000e+03, 4.9152000000e+03, 5.7344000000e+03, 6.5536000000e+03,
        7.3728000000e+03, 8.1920000000e+03, 9.0112000000e+03, 9.8304000000e+03,
        1.0649600000e+04, 1.1468800000e+04, 1.2288000000e+04, 1.3107200000e+04,
        1.3926400000e+04, 1.4745600000e+04, 1.5564800000e+04, 1.6384000000e+04,
        1.7203200000e+04, 1.8022400000e+04, 1.8841600000e+04, 1.9660800000e+04,
        2.0480000000e+04, 2.1299200000e+04, 2.2118400000e+04, 2.2937600000e+04,
        2.3756800000e+04, 2.4576000000e+04, 2.5395200000e+04, 2.6214400000e+04,
        2.7033600000e+04, 2.7852800000e+04, 2.8672000000e+04, 2.9491200000e+04,
        3.0310400000e+04, 3.1129600000e+04, 3.1948800000e+04, 3.2768000000e+04,
        3.3587200000e+04, 3.4406400000e+04, 3.5225600000e+04, 3.6044800000e+04,
        3.6864000000e+04, 3.7683200000e+04, 3.8502400000e+04, 3.9321600000e+04,
        4.0140800000e+04, 4.0960000000e+04, 4.1779200000e+04, 4.2598400000e+04,
        4.3417600000e+04, 4.4236800000e+04, 4.5056000000e+04, 4.5875200000e+04,
        4.6694400000e+04, 4.7513600000e+04, 4.8332800000e+04, 4.9152000000e+04,
        4.9971200000e+04, 5.0790400000e+04, 5.1609600000e+04, 5.2428800000e+04,
        5.3248000000e+04, 5.4067200000e+04, 5.4886400000e+04, 5.5705600000e+04,
        5.6524800000e+04, 5.7344000000e+04, 5.8163200000e+04, 5.8982400000e+04,
        5.9801600000e+04, 6.0620800000e+04, 6.1440000000e+04, 6.2259200000e+04,
        6.3078400000e+04, 6.3897600000e+04, 6.4716800000e+04, 6.5536000000e+04,
        6.6355200000e+04, 6.7174400000e+04, 6.7993600000e+04, 6.8812800000e+04,
        6.9632000000e+04, 7.0451200000e+04, 7.1270400000e+04, 7.2089600000e+04,
        7.2908800000e+04, 7.3728000000e+04, 7.4547200000e+04, 7.5366400000e+04,
        7.6185600000e+04, 7.7004800000e+04, 7.7824000000e+04, 7.8643200000e+04,
        7.9462400000e+04, 8.0281600000e+04, 8.1100800000e+04, 8.1920000000e+04,
        8.2739200000e+04, 8.3558400000e+04, 8.4377600000e+04, 8.5196800000e+04,
        8.6016000000e+04, 8.6835200000e+04, 8.7654400000e+04, 8.8473600000e+04,
        8.9292800000e+04, 9.0112000000e+04, 9.0931200000e+04, 9.1750400000e+04,
        9.2569600000e+04, 9.3388800000e+04, 9.4208000000e+04, 9.5027200000e+04,
        9.5846400000e+04, 9.6665600000e+04, 9.7484800000e+04, 9.8304000000e+04,
        9.9123200000e+04, 9.9942400000e+04, 1.0076160000e+05, 1.0158080000e+05,
        1.0240000000e+05, 1.0321920000e+05, 1.0403840000e+05, 1.0485760000e+05,
        1.0567680000e+05, 1.0649600000e+05, 1.0731520000e+05, 1.0813440000e+05,
        1.0895360000e+05, 1.0977280000e+05, 1.1059200000e+05, 1.1141120000e+05,
        1.1223040000e+05, 1.1304960000e+05, 1.1386880000e+05, 1.1468800000e+05,
        1.1550720000e+05, 1.1632640000e+05, 1.1714560000e+05, 1.1796480000e+05,
        1.1878400000e+05, 1.1960320000e+05, 1.2042240000e+05, 1.2124160000e+05,
        1.2206080000e+05, 1.2288000000e+05, 1.2369920000e+05, 1.2451840000e+05,
        1.2533760000e+05, 1.2615680000e+05, 1.2697600000e+05, 1.2779520000e+05,
        1.2861440000e+05, 1.2943360000e+05, 1.3025280000e+05, 1.3107200000e+05,
        1.3189120000e+05, 1.3271040000e+05, 1.3352960000e+05, 1.3434880000e+05,
        1.3516800000e+05, 1.3598720000e+05, 1.3680640000e+05, 1.3762560000e+05,
        1.3844480000e+05, 1.3926400000e+05, 1.4008320000e+05, 1.4090240000e+05,
        1.4172160000e+05, 1.4254080000e+05, 1.4336000000e+05, 1.4417920000e+05,
        1.4499840000e+05, 1.4581760000e+05, 1.4663680000e+05, 1.4745600000e+05,
        1.4827520000e+05, 1.4909440000e+05, 1.4991360000e+05, 1.5073280000e+05,
        1.5155200000e+05, 1.5237120000e+05, 1.5319040000e+05, 1.5400960000e+05,
        1.5482880000e+05, 1.5564800000e+05, 1.5646720000e+05, 1.5728640000e+05,
        1.5810560000e+05, 1.5892480000e+05, 1.5974400000e+05, 1.6056320000e+05,
        1.6138240000e+05, 1.6220160000e+05, 1.6302080000e+05, 1.6384000000e+05,
        0.0000000000e+00
    ],
    [
        1.6384000000e+03, 3.2768000000e+03, 4.9152000000e+03, 6.5536000000e+03,
        8.1920000000e+03, 9.8304000000e+03, 1.1468800000e+04, 1.3107200000e+04,
        1.4745600000e+04, 1.6384000000e+04, 1.8022400000e+04, 1.9660800000e+04,
        2.1299200000e+04, 2.2937600000e+04, 2.4576000000e+04, 2.6214400000e+04,
        2.7852800000e+04, 2.9491200000e+04, 3.1129600000e+04, 3.2768000000e+04,
        3.4406400000e+04, 3.6044800000e+04, 3.7683200000e+04, 3.9321600000e+04,
        4.0960000000e+04, 4.2598400000e+04, 4.4236800000e+04, 4.5875200000e+04,
        4.7513600000e+04, 4.9152000000e+04, 5.0790400000e+04, 5.2428800000e+04,
        5.4067200000e+04, 5.5705600000e+04, 5.7344000000e+04, 5.8982400000e+04,
        6.0620800000e+04, 6.2259200000e+04, 6.3897600000e+04, 6.5536000000e+04,
        6.7174400000e+04, 6.8812800000e+04, 7.0451200000e+04, 7.2089600000e+04,
        7.3728000000e+04, 7.5366400000e+04, 7.7004800000e+04, 7.8643200000e+04,
        8.0281600000e+04, 8.1920000000e+04, 8.3558400000e+04, 8.5196800000e+04,
        8.6835200000e+04, 8.8473600000e+04, 9.0112000000e+04, 9.1750400000e+04,
        9.3388800000e+04, 9.5027200000e+04, 9.6665600000e+04, 9.8304000000e+04,
        9.9942400000e+04, 1.0158080000e+05, 1.0321920000e+05, 1.0485760000e+05,
        1.0649600000e+05, 1.0813440000e+05, 1.0977280000e+05, 1.1141120000e+05,
        1.1304960000e+05, 1.1468800000e+05, 1.1632640000e+05, 1.1796480000e+05,
        1.1960320000e+05, 1.2124160000e+05, 1.2288000000e+05, 1.2451840000e+05,
        1.2615680000e+05, 1.2779520000e+05, 1.2943360000e+05, 1.3107200000e+05,
        1.3271040000e+05, 1.3434880000e+05, 1.3598720000e+05, 1.3762560000e+05,
        1.3926400000e+05, 1.4090240000e+05, 1.4254080000e+05, 1.4417920000e+05,
        1.4581760000e+05, 1.4745600000e+05, 1.4909440000e+05, 1.5073280000e+05,
        1.5237120000e+05, 1.5400960000e+05, 1.5564800000e+05, 1.5728640000e+05,
        1.5892480000e+05, 1.6056320000e+05, 1.6220160000e+05, 1.6384000000e+05,
        1.6547840000e+05, 1.6711680000e+05, 1.6875520000e+05, 1.7039360000e+05,
        1.7203200000e+05, 1.7367040000e+05, 1.7530880000e+05, 1.7694720000e+05,
        1.7858560000e+05, 1.8022400000e+05, 1.8186240000e+05, 1.8350080000e+05,
        1.8513920000e+05, 1.8677760000e+05, 1.8841600000e+05, 1.9005440000e+05,
        1.9169280000e+05, 1.9333120000e+05, 1.9496960000e+05, 1.9660800000e+05,
        1.9824640000e+05, 1.9988480000e+05, 2.0152320000e+05, 2.0316160000e+05,
        2.0480000000e+05, 2.0643840000e+05, 2.0807680000e+05, 2.0971520000e+05,
        2.1135360000e+05, 2.1299200000e+05, 2.1463040000e+05, 2.1626880000e+05,
        2.1790720000e+05, 2.1954560000e+05, 2.2118400000e+05, 2.2282240000e+05,
        2.2446080000e+05, 2.2609920000e+05, 2.2773760000e+05, 2.2937600000e+05,
        2.3101440000e+05, 2.3265280000e+05, 2.3429120000e+05, 2.3592960000e+05,
        2.3756800000e+05, 2.3920640000e+05, 2.4084480000e+05, 2.4248320000e+05,
        2.4412160000e+05, 2.4576000000e+05, 2.4739840000e+05, 2.4903680000e+05,
        2.5067520000e+05, 2.5231360000e+05, 2.5395200000e+05, 2.5559040000e+05,
        2.5722880000e+05, 2.5886720000e+05, 2.6050560000e+05, 2.6214400000e+05,
        2.6378240000e+05, 2.6542080000e+05, 2.6705920000e+05, 2.6869760000e+05,
        2.7033600000e+05, 2.7197440000e+05, 2.7361280000e+05, 2.7525120000e+05,
        2.7688960000e+05, 2.7852800000e+05, 2.8016640000e+05, 2.8180480000e+05,
        2.8344320000e+05, 2.8508160000e+05, 2.8672000000e+05, 2.8835840000e+05,
        2.8999680000e+05, 2.9163520000e+05, 2.9327360000e+05, 2.9491200000e+05,
        2.9655040000e+05, 2.9818880000e+05, 2.9982720000e+05, 3.0146560000e+05,
        3.0310400000e+05, 3.0474240000e+05, 3.0638080000e+05, 3.0801920000e+05,
        3.0965760000e+05, 3.1129600000e+05, 3.1293440000e+05, 3.1457280000e+05,
        3.1621120000e+05, 3.1784960000e+05, 3.1948800000e+05, 3.2112640000e+05,
        3.2276480000e+05, 3.2440320000e+05, 3.2604160000e+05, 3.2768000000e+05,
        0.0000000000e+00
    ],
    [
        3.2768000000e+03, 6.5536000000e+03, 9.8304000000e+03, 1.3107200000e+04,
        1.6384000000e+04, 1.9660800000e+04, 2.2937600000e+04, 2.6214400000e+04,
        2.9491200000e+04, 3.2768000000e+04, 3.6044800000e+04, 3.9321600000e+04,
        4.2598400000e+04, 4.5875200000e+04, 4.9152000000e+04, 5.2428800000e+04,
        5.5705600000e+04, 5.8982400000e+04, 6.2259200000e+04, 6.5536000000e+04,
        6.8812800000e+04, 7.2089600000e+04, 7.5366400000e+04, 7.8643200000e+04,
        8.1920000000e+04, 8.5196800000e+04, 8.8473600000e+04, 9.1750400000e+04,
        9.5027200000e+04, 9.8304000000e+04, 1.0158080000e+05, 1.0485760000e+05,
        1.0813440000e+05, 1.1141120000e+05, 1.1468800000e+05, 1.1796480000e+05,
        1.2124160000e+05, 1.2451840000e+05, 1.2779520000e+05, 1.3107200000e+05,
        1.3434880000e+05, 1.3762560000e+05, 1.4090240000e+05, 1.4417920000e+05,
        1.4745600000e+05, 1.5073280000e+05, 1.5400960000e+05, 1.5728640000e+05,
        1.6056320000e+05, 1.6384000000e+05, 1.6711680000e+05, 1.7039360000e+05,
        1.7367040000e+05, 1.7694720000e+05, 1.8022400000e+05, 1.8350080000e+05,
        1.8677760000e+05, 1.9005440000e+05, 1.9333120000e+05, 1.9660800000e+05,
        1.9988480000e+05, 2.0316160000e+05, 2.0643840000e+05, 2.0971520000e+05,
        2.1299200000e+05, 2.1626880000e+05, 2.1954560000e+05, 2.2282240000e+05,
        2.2609920000e+05, 2.2937600000e+05, 2.3265280000e+05, 2.3592960000e+05,
        2.3920640000e+05, 2.4248320000e+05, 2.4576000000e+05, 2.4903680000e+05,
        2.5231360000e+05, 2.5559040000e+05, 2.5886720000e+05, 2.6214400000e+05,
        2.6542080000e+05, 2.6869760000e+05, 2.7197440000e+05, 2.7525120000e+05,
        2.7852800000e+05, 2.8180480000e+05, 2.8508160000e+05, 2.8835840000e+05,
        2.9163520000e+05, 2.9491200000e+05, 2.9818880000e+05, 3.0146560000e+05,
        3.0474240000e+05, 3.0801920000e+05, 3.1129600000e+05, 3.1457280000e+05,
        3.1784960000e+05, 3.2112640000e+05, 3.2440320000e+05, 3.2768000000e+05,
        3.3095680000e+05, 3.3423360000e+05, 3.3751040000e+05, 3.4078720000e+05,
        3.4406400000e+05, 3.4734080000e+05, 3.5061760000e+05, 3.5389440000e+05,
        3.5717120000e+05, 3.6044800000e+05, 3.6372480000e+05, 3.6700160000e+05,
        3.7027840000e+05, 3.7355520000e+05, 3.7683200000e+05, 3.8010880000e+05,
        3.8338560000e+05, 3.8666240000e+05, 3.8993920000e+05, 3.9321600000e+05,
        3.9649280000e+05, 3.9976960000e+05, 4.0304640000e+05, 4.0632320000e+05,
        4.0960000000e+05, 4.1287680000e+05, 4.1615360000e+05, 4.1943040000e+05,
        4.2270720000e+05, 4.2598400000e+05, 4.2926080000e+05, 4.3253760000e+05,
        4.3581440000e+05, 4.3909120000e+05, 4.4236800000e+05, 4.4564480000e+05,
        4.4892160000e+05, 4.5219840000e+05, 4.5547520000e+05, 4.5875200000e+05,
        4.6202880000e+05, 4.6530560000e+05, 4.6858240000e+05, 4.7185920000e+05,
        4.7513600000e+05, 4.7841280000e+05, 4.8168960000e+05, 4.8496640000e+05,
        4.8824320000e+05, 4.9152000000e+05, 4.9479680000e+05, 4.9807360000e+05,
        5.0135040000e+05, 5.0462720000e+05, 5.0790400000e+05, 5.1118080000e+05,
        5.1445760000e+05, 5.1773440000e+05, 5.2101120000e+05, 5.2428800000e+05,
        5.2756480000e+05, 5.3084160000e+05, 5.3411840000e+05, 5.3739520000e+05,
        5.4067200000e+05, 5.4394880000e+05, 5.4722560000e+05, 5.5050240000e+05,
        5.5377920000e+05, 5.5705600000e+05, 5.6033280000e+05, 5.6360960000e+05,
        5.6688640000e+05, 5.7016320000e+05, 5.7344000000e+05, 5.7671680000e+05,
        5.7999360000e+05, 5.8327040000e+05, 5.8654720000e+05, 5.8982400000e+05,
        5.9310080000e+05, 5.9637760000e+05, 5.9965440000e+05, 6.0293120000e+05,
        6.0620800000e+05, 6.0948480000e+05, 6.1276160000e+05, 6.1603840000e+05,
        6.1931520000e+05, 6.2259200000e+05, 6.2586880000e+05, 6.2914560000e+05,
        6.3242240000e+05, 6.3569920000e+05, 6.3897600000e+05, 6.4225280000e+05,
        6.4552960000e+05, 6.4880640000e+05, 6.5208320000e+05, 6.5536000000e+05,
        0.0000000000e+00
    ],
    [
        6.5536000000e+03, 1.3107200000e+04, 1.9660800000e+04, 2.6214400000e+04,
        3.2768000000e+04, 3.9321600000e+04, 4.5875200000e+04, 5.2428800000e+04,
        5.8982400000e+04, 6.5536000000e+04, 7.2089600000e+04, 7.8643200000e+04,
        8.5196800000e+04, 9.1750400000e+04, 9.8304000000e+04, 1.0485760000e+05,
        1.1141120000e+05, 1.1796480000e+05, 1.2451840000e+05, 1.3107200000e+05,
        1.3762560000e+05, 1.4417920000e+05, 1.5073280000e+05, 1.5728640000e+05,
        1.6384000000e+05, 1.7039360000e+05, 1.7694720000e+05, 1.8350080000e+05,
        1.9005440000e+05, 1.9660800000e+05, 2.0316160000e+05, 2.0971520000e+05,
        2.1626880000e+05, 2.2282240000e+05, 2.2937600000e+05, 2.3592960000e+05,
        2.4248320000e+05, 2.4903680000e+05, 2.5559040000e+05, 2.6214400000e+05,
        2.6869760000e+05, 2.7525120000e+05, 2.8180480000e+05, 2.8835840000e+05,
        2.9491200000e+05, 3.0146560000e+05, 3.0801920000e+05, 3.1457280000e+05,
        3.2112640000e+05, 3.2768000000e+05, 3.3423360000e+05, 3.4078720000e+05,
        3.4734080000e+05, 3.5389440000e+05, 3.6044800000e+05, 3.6700160000e+05,
        3.7355520000e+05, 3.8010880000e+05, 3.8666240000e+05, 3.9321600000e+05,
        3.9976960000e+05, 4.0632320000e+05, 4.1287680000e+05, 4.1943040000e+05,
        4.2598400000e+05, 4.3253760000e+05, 4.3909120000e+05, 4.4564480000e+05,
        4.5219840000e+05, 4.5875200000e+05, 4.6530560000e+05, 4.7185920000e+05,
        4.7841280000e+05, 4.8496640000e+05, 4.9152000000e+05, 4.9807360000e+05,
        5.0462720000e+05, 5.1118080000e+05, 5.1773440000e+05, 5.2428800000e+05,
        5.3084160000e+05, 5.3739520000e+05, 5.4394880000e+05, 5.5050240000e+05,
        5.5705600000e+05, 5.6360960000e+05, 5.7016320000e+05, 5.7671680000e+05,
        5.8327040000e+05, 5.8982400000e+05, 5.9637760000e+05, 6.0293120000e+05,
        6.0948480000e+05, 6.1603840000e+05, 6.2259200000e+05, 6.2914560000e+05,
        6.3569920000e+05, 6.4225280000e+05, 6.4880640000e+05, 6.5536000000e+05,
        6.6191360000e+05, 6.6846720000e+05, 6.7502080000e+05, 6.8157440000e+05,
        6.8812800000e+05, 6.9468160000e+05, 7.0123520000e+05, 7.0778880000e+05,
        7.1434240000e+05, 7.2089600000e+05, 7.2744960000e+05, 7.3400320000e+05,
        7.4055680000e+05, 7.4711040000e+05, 7.5366400000e+05, 7.6021760000e+05,
        7.6677120000e+05, 7.7332480000e+05, 7.7987840000e+05, 7.8643200000e+05,
        7.9298560000e+05, 7.9953920000e+05, 8.0609280000e+05, 8.1264640000e+05,
        8.1920000000e+05, 8.2575360000e+05, 8.3230720000e+05, 8.3886080000e+05,
        8.4541440000e+05, 8.5196800000e+05, 8.5852160000e+05, 8.6507520000e+05,
        8.7162880000e+05, 8.7818240000e+05, 8.8473600000e+05, 8.9128960000e+05,
        8.9784320000e+05, 9.0439680000e+05, 9.1095040000e+05, 9.1750400000e+05,
        9.2405760000e+05, 9.3061120000e+05, 9.3716480000e+05, 9.4371840000e+05,
        9.5027200000e+05, 9.5682560000e+05, 9.6337920000e+05, 9.6993280000e+05,
        9.7648640000e+05, 9.8304000000e+05, 9.8959360000e+05, 9.9614720000e+05,
        1.0027008000e+06, 1.0092544000e+06, 1.0158080000e+06, 1.0223616000e+06,
        1.0289152000e+06, 1.0354688000e+06, 1.0420224000e+06, 1.0485760000e+06,
        1.0551296000e+06, 1.0616832000e+06, 1.0682368000e+06, 1.0747904000e+06,
        1.0813440000e+06, 1.0878976000e+06, 1.0944512000e+06, 1.1010048000e+06,
        1.1075584000e+06, 1.1141120000e+06, 1.1206656000e+06, 1.1272192000e+06,
        1.1337728000e+06, 1.1403264000e+06, 1.1468800000e+06, 1.1534336000e+06,
        1.1599872000e+06, 1.1665408000e+06, 1.1730944000e+06, 1.1796480000e+06,
        1.1862016000e+06, 1.1927552000e+06, 1.1993088000e+06, 1.2058624000e+06,
        1.2124160000e+06, 1.2189696000e+06, 1.2255232000e+06, 1.2320768000e+06,
        1.2386304000e+06, 1.2451840000e+06, 1.2517376000e+06, 1.2582912000e+06,
        1.2648448000e+06, 1.2713984000e+06, 1.2779520000e+06, 1.2845056000e+06,
        1.2910592000e+06, 1.2976128000e+06, 1.3041664000e+06, 1.3107200000e+06,
        0.0000000000e+00
    ],
];

pub(super) const BIAS_DATA: [[f64; 201]; 15] = [
    [
        1.8914149240e+00, 1.8632554244e+00, 1.8355151651e+00, 1.8081879045e+00,
        1.7812674938e+00, 1.7547478757e+00, 1.7286230834e+00, 1.7028872385e+00,
        1.6775345504e+00, 1.6525593147e+00, 1.6279559118e+00, 1.6037188059e+00,
        1.5798425435e+00, 1.5563217523e+00, 1.5331511400e+00, 1.5103254932e+00,
        1.4878396761e+00, 1.4656886291e+00, 1.4438673683e+00, 1.4223709837e+00,
        1.4011946386e+00, 1.3803335682e+00, 1.3597830787e+00, 1.3395385461e+00,
        1.3195954153e+00, 1.2999491990e+00, 1.2805954768e+00, 1.2615298940e+00,
        1.2427481608e+00, 1.2242460511e+00, 1.2060194020e+00, 1.1880641123e+00,
        1.1703761420e+00, 1.1529515113e+00, 1.1357862996e+00, 1.1188766446e+00,
        1.1022187415e+00, 1.0858088423e+00, 1.0696432547e+00, 1.0537183413e+00,
        1.0380305190e+00, 1.0225762579e+00, 1.0073520808e+00, 9.9235456222e-01,
        9.7758032757e-01, 9.6302605261e-01, 9.4868846257e-01, 9.3456433144e-01,
        9.2065048123e-01, 9.0694378126e-01, 8.9344114747e-01, 8.8013954171e-01,
        8.6703597105e-01, 8.5412748715e-01, 8.4141118553e-01, 8.2888420498e-01,
        8.1654372688e-01, 8.0438697456e-01, 7.9241121270e-01, 7.8061374670e-01,
        7.6899192209e-01, 7.5754312391e-01, 7.4626477613e-01, 7.3515434107e-01,
        7.2420931884e-01, 7.1342724676e-01, 7.0280569882e-01, 6.9234228513e-01,
        6.8203465138e-01, 6.7188047829e-01, 6.6187748115e-01, 6.5202340924e-01,
        6.4231604534e-01, 6.3275320526e-01, 6.2333273733e-01, 6.1405252189e-01,
        6.0491047085e-01, 5.9590452723e-01, 5.8703266464e-01, 5.7829288687e-01,
        5.6968322744e-01, 5.6120174915e-01, 5.5284654361e-01, 5.4461573088e-01,
        5.3650745899e-01, 5.2851990353e-01, 5.2065126729e-01, 5.1289977977e-01,
        5.0526369688e-01, 4.9774130044e-01, 4.9033089790e-01, 4.8303082187e-01,
        4.7583942983e-01, 4.6875510365e-01, 4.6177624936e-01, 4.5490129667e-01,
        4.4812869869e-01, 4.4145693156e-01, 4.3488449410e-01, 4.2840990748e-01,
        4.2203171491e-01, 4.1574848125e-01, 4.0955879275e-01, 4.0346125671e-01,
        3.9745450115e-01, 3.9153717453e-01, 3.8570794543e-01, 3.7996550224e-01,
        3.7430855289e-01, 3.6873582455e-01, 3.6324606333e-01, 3.5783803400e-01,
        3.5251051973e-01, 3.4726232182e-01, 3.4209225940e-01, 3.3699916918e-01,
        3.3198190520e-01, 3.2703933854e-01, 3.2217035712e-01, 3.1737386539e-01,
        3.1264878411e-01, 3.0799405013e-01, 3.0340861611e-01, 2.9889145031e-01,
        2.9444153634e-01, 2.9005787297e-01, 2.8573947383e-01, 2.8148536729e-01,
        2.7729459614e-01, 2.7316621745e-01, 2.6909930230e-01, 2.6509293564e-01,
        2.6114621600e-01, 2.5725825536e-01, 2.5342817892e-01, 2.4965512489e-01,
        2.4593824431e-01, 2.4227670087e-01, 2.3866967072e-01, 2.3511634225e-01,
        2.3161591594e-01, 2.2816760420e-01, 2.2477063112e-01, 2.2142423239e-01,
        2.1812765505e-01, 2.1488015735e-01, 2.1168100858e-01, 2.0852948894e-01,
        2.0542488932e-01, 2.0236651116e-01, 1.9935366632e-01, 1.9638567689e-01,
        1.9346187508e-01, 1.9058160299e-01, 1.8774421258e-01, 1.8494906540e-01,
        1.8219553255e-01, 1.7948299445e-01, 1.7681084079e-01, 1.7417847032e-01,
        1.7158529073e-01, 1.6903071856e-01, 1.6651417901e-01, 1.6403510586e-01,
        1.6159294129e-01, 1.5918713582e-01, 1.5681714813e-01, 1.5448244496e-01,
        1.5218250099e-01, 1.4991679872e-01, 1.4768482837e-01, 1.4548608772e-01,
        1.4332008206e-01, 1.4118632403e-01, 1.3908433351e-01, 1.3701363755e-01,
        1.3497377024e-01, 1.3296427259e-01, 1.3098469247e-01, 1.2903458446e-01,
        1.2711350977e-01, 1.2522103616e-01, 1.2335673781e-01, 1.2152019525e-01,
        1.1971099524e-01, 1.1792873072e-01, 1.1617300065e-01, 1.1444341000e-01,
        1.1273956960e-01, 1.1106109608e-01, 1.0940761177e-01, 1.0777874464e-01,
        1.0617412818e-01, 1.0459340135e-01, 1.0303620847e-01, 1.0150219918e-01,
        9.9991028306e-02, 9.8502355837e-02, 9.7035846814e-02, 9.5591171266e-02,
        0.0000000000e+00
    ],
    [
        3.7828298481e+00, 3.7265108488e+00, 3.6710303302e+00, 3.6163758090e+00,
        3.5625349875e+00, 3.5094957514e+00, 3.4572461667e+00, 3.4057744770e+00,
        3.3550691009e+00, 3.3051186295e+00, 3.2559118237e+00, 3.2074376118e+00,
        3.1596850869e+00, 3.1126435045e+00, 3.0663022800e+00, 3.0206509865e+00,
        2.9756793522e+00, 2.9313772583e+00, 2.8877347366e+00, 2.8447419674e+00,
        2.8023892772e+00, 2.7606671364e+00, 2.7195661573e+00, 2.6790770921e+00,
        2.6391908306e+00, 2.5998983981e+00, 2.5611909537e+00, 2.5230597881e+00,
        2.4854963216e+00, 2.4484921022e+00, 2.4120388039e+00, 2.3761282245e+00,
        2.3407522840e+00, 2.3059030226e+00, 2.2715725992e+00, 2.2377532891e+00,
        2.2044374830e+00, 2.1716176846e+00, 2.1392865094e+00, 2.1074366826e+00,
        2.0760610380e+00, 2.0451525159e+00, 2.0147041617e+00, 1.9847091244e+00,
        1.9551606551e+00, 1.9260521052e+00, 1.8973769251e+00, 1.8691286629e+00,
        1.8413009625e+00, 1.8138875625e+00, 1.7868822949e+00, 1.7602790834e+00,
        1.7340719421e+00, 1.7082549743e+00, 1.6828223711e+00, 1.6577684100e+00,
        1.6330874538e+00, 1.6087739491e+00, 1.5848224254e+00, 1.5612274934e+00,
        1.5379838442e+00, 1.5150862478e+00, 1.4925295523e+00, 1.4703086821e+00,
        1.4484186377e+00, 1.4268544935e+00, 1.4056113976e+00, 1.3846845703e+00,
        1.3640693028e+00, 1.3437609566e+00, 1.3237549623e+00, 1.3040468185e+00,
        1.2846320907e+00, 1.2655064105e+00, 1.2466654747e+00, 1.2281050438e+00,
        1.2098209417e+00, 1.1918090545e+00, 1.1740653293e+00, 1.1565857737e+00,
        1.1393664549e+00, 1.1224034983e+00, 1.1056930872e+00, 1.0892314618e+00,
        1.0730149180e+00, 1.0570398071e+00, 1.0413025346e+00, 1.0257995595e+00,
        1.0105273938e+00, 9.9548260088e-01, 9.8066179579e-01, 9.6606164375e-01,
        9.5167885965e-01, 9.3751020731e-01, 9.2355249872e-01, 9.0980259334e-01,
        8.9625739738e-01, 8.8291386312e-01, 8.6976898820e-01, 8.5681981497e-01,
        8.4406342982e-01, 8.3149696249e-01, 8.1911758550e-01, 8.0692251341e-01,
        7.9490900230e-01, 7.8307434906e-01, 7.7141589086e-01, 7.5993100448e-01,
        7.4861710579e-01, 7.3747164910e-01, 7.2649212665e-01, 7.1567606799e-01,
        7.0502103947e-01, 6.9452464365e-01, 6.8418451881e-01, 6.7399833837e-01,
        6.6396381040e-01, 6.5407867709e-01, 6.4434071424e-01, 6.3474773077e-01,
        6.2529756822e-01, 6.1598810026e-01, 6.0681723222e-01, 5.9778290061e-01,
        5.8888307268e-01, 5.8011574593e-01, 5.7147894767e-01, 5.6297073458e-01,
        5.5458919228e-01, 5.4633243489e-01, 5.3819860460e-01, 5.3018587127e-01,
        5.2229243200e-01, 5.1451651073e-01, 5.0685635784e-01, 4.9931024977e-01,
        4.9187648862e-01, 4.8455340175e-01, 4.7733934144e-01, 4.7023268449e-01,
        4.6323183188e-01, 4.5633520839e-01, 4.4954126225e-01, 4.4284846479e-01,
        4.3625531010e-01, 4.2976031469e-01, 4.2336201717e-01, 4.1705897789e-01,
        4.1084977864e-01, 4.0473302232e-01, 3.9870733264e-01, 3.9277135379e-01,
        3.8692375015e-01, 3.8116320599e-01, 3.7548842516e-01, 3.6989813081e-01,
        3.6439106509e-01, 3.5896598891e-01, 3.5362168158e-01, 3.4835694063e-01,
        3.4317058146e-01, 3.3806143712e-01, 3.3302835802e-01, 3.2807021171e-01,
        3.2318588259e-01, 3.1837427165e-01, 3.1363429626e-01, 3.0896488992e-01,
        3.0436500198e-01, 2.9983359744e-01, 2.9536965674e-01, 2.9097217545e-01,
        2.8664016413e-01, 2.8237264805e-01, 2.7816866701e-01, 2.7402727510e-01,
        2.6994754047e-01, 2.6592854519e-01, 2.6196938495e-01, 2.5806916892e-01,
        2.5422701955e-01, 2.5044207233e-01, 2.4671347563e-01, 2.4304039050e-01,
        2.3942199049e-01, 2.3585746143e-01, 2.3234600130e-01, 2.2888682000e-01,
        2.2547913920e-01, 2.2212219216e-01, 2.1881522355e-01, 2.1555748928e-01,
        2.1234825636e-01, 2.0918680270e-01, 2.0607241694e-01, 2.0300439836e-01,
        1.9998205661e-01, 1.9700471167e-01, 1.9407169363e-01, 1.9118234253e-01,
        0.0000000000e+00
    ],
    [
        7.5656596962e+00, 7.4530216977e+00, 7.3420606605e+00, 7.2327516179e+00,
        7.1250699750e+00, 7.0189915029e+00, 6.9144923335e+00, 6.8115489540e+00,
        6.7101382018e+00, 6.6102372589e+00, 6.5118236474e+00, 6.4148752236e+00,
        6.3193701739e+00, 6.2252870091e+00, 6.1326045601e+00, 6.0413019730e+00,
        5.9513587043e+00, 5.8627545165e+00, 5.7754694732e+00, 5.6894839348e+00,
        5.6047785544e+00, 5.5213342728e+00, 5.4391323146e+00, 5.3581541842e+00,
        5.2783816611e+00, 5.1997967961e+00, 5.1223819074e+00, 5.0461195762e+00,
        4.9709926432e+00, 4.8969842045e+00, 4.8240776079e+00, 4.7522564491e+00,
        4.6815045680e+00, 4.6118060453e+00, 4.5431451983e+00, 4.4755065782e+00,
        4.4088749660e+00, 4.3432353692e+00, 4.2785730187e+00, 4.2148733652e+00,
        4.1521220760e+00, 4.0903050317e+00, 4.0294083234e+00, 3.9694182489e+00,
        3.9103213103e+00, 3.8521042104e+00, 3.7947538503e+00, 3.7382573258e+00,
        3.6826019249e+00, 3.6277751251e+00, 3.5737645899e+00, 3.5205581668e+00,
        3.4681438842e+00, 3.4165099486e+00, 3.3656447421e+00, 3.3155368199e+00,
        3.2661749075e+00, 3.2175478982e+00, 3.1696448508e+00, 3.1224549868e+00,
        3.0759676884e+00, 3.0301724957e+00, 2.9850591045e+00, 2.9406173643e+00,
        2.8968372754e+00, 2.8537089870e+00, 2.8112227953e+00, 2.7693691405e+00,
        2.7281386055e+00, 2.6875219132e+00, 2.6475099246e+00, 2.6080936370e+00,
        2.5692641814e+00, 2.5310128211e+00, 2.4933309493e+00, 2.4562100875e+00,
        2.4196418834e+00, 2.3836181089e+00, 2.3481306586e+00, 2.3131715475e+00,
        2.2787329098e+00, 2.2448069966e+00, 2.2113861744e+00, 2.1784629235e+00,
        2.1460298359e+00, 2.1140796141e+00, 2.0826050692e+00, 2.0515991191e+00,
        2.0210547875e+00, 1.9909652018e+00, 1.9613235916e+00, 1.9321232875e+00,
        1.9033577193e+00, 1.8750204146e+00, 1.8471049974e+00, 1.8196051867e+00,
        1.7925147948e+00, 1.7658277262e+00, 1.7395379764e+00, 1.7136396299e+00,
        1.6881268596e+00, 1.6629939250e+00, 1.6382351710e+00, 1.6138450268e+00,
        1.5898180046e+00, 1.5661486981e+00, 1.5428317817e+00, 1.5198620090e+00,
        1.4972342116e+00, 1.4749432982e+00, 1.4529842533e+00, 1.4313521360e+00,
        1.4100420789e+00, 1.3890492873e+00, 1.3683690376e+00, 1.3479966767e+00,
        1.3279276208e+00, 1.3081573542e+00, 1.2886814285e+00, 1.2694954615e+00,
        1.2505951364e+00, 1.2319762005e+00, 1.2136344644e+00, 1.1955658012e+00,
        1.1777661454e+00, 1.1602314919e+00, 1.1429578953e+00, 1.1259414692e+00,
        1.1091783846e+00, 1.0926648698e+00, 1.0763972092e+00, 1.0603717425e+00,
        1.0445848640e+00, 1.0290330215e+00, 1.0137127157e+00, 9.9862049955e-01,
        9.8375297724e-01, 9.6910680349e-01, 9.5467868287e-01, 9.4046536898e-01,
        9.2646366377e-01, 9.1267041679e-01, 8.9908252450e-01, 8.8569692957e-01,
        8.7251062019e-01, 8.5952062938e-01, 8.4672403434e-01, 8.3411795578e-01,
        8.2169955727e-01, 8.0946604464e-01, 7.9741466527e-01, 7.8554270758e-01,
        7.7384750030e-01, 7.6232641198e-01, 7.5097685031e-01, 7.3979626161e-01,
        7.2878213019e-01, 7.1793197782e-01, 7.0724336317e-01, 6.9671388126e-01,
        6.8634116292e-01, 6.7612287423e-01, 6.6605671605e-01, 6.5614042343e-01,
        6.4637176518e-01, 6.3674854330e-01, 6.2726859253e-01, 6.1792977984e-01,
        6.0873000395e-01, 5.9966719489e-01, 5.9073931347e-01, 5.8194435090e-01,
        5.7328032825e-01, 5.6474529610e-01, 5.5633733402e-01, 5.4805455019e-01,
        5.3989508095e-01, 5.3185709038e-01, 5.2393876989e-01, 5.1613833784e-01,
        5.0845403909e-01, 5.0088414465e-01, 4.9342695125e-01, 4.8608078100e-01,
        4.7884398098e-01, 4.7171492287e-01, 4.6469200261e-01, 4.5777364000e-01,
        4.5095827840e-01, 4.4424438432e-01, 4.3763044709e-01, 4.3111497857e-01,
        4.2469651273e-01, 4.1837360540e-01, 4.1214483389e-01, 4.0600879671e-01,
        3.9996411322e-01, 3.9400942335e-01, 3.8814338726e-01, 3.8236468507e-01,
        0.0000000000e+00
    ],
    [
        1.5131319392e+01, 1.4906043395e+01, 1.4684121321e+01, 1.4465503236e+01,
        1.4250139950e+01, 1.4037983006e+01, 1.3828984667e+01, 1.3623097908e+01,
        1.3420276404e+01, 1.3220474518e+01, 1.3023647295e+01, 1.2829750447e+01,
        1.2638740348e+01, 1.2450574018e+01, 1.2265209120e+01, 1.2082603946e+01,
        1.1902717409e+01, 1.1725509033e+01, 1.1550938946e+01, 1.1378967870e+01,
        1.1209557109e+01, 1.1042668546e+01, 1.0878264629e+01, 1.0716308368e+01,
        1.0556763322e+01, 1.0399593592e+01, 1.0244763815e+01, 1.0092239152e+01,
        9.9419852863e+00, 9.7939684089e+00, 9.6481552157e+00, 9.5045128981e+00,
        9.3630091361e+00, 9.2236120906e+00, 9.0862903967e+00, 8.9510131565e+00,
        8.8177499320e+00, 8.6864707384e+00, 8.5571460374e+00, 8.4297467304e+00,
        8.3042441520e+00, 8.1806100635e+00, 8.0588166468e+00, 7.9388364978e+00,
        7.8206426205e+00, 7.7042084209e+00, 7.5895077006e+00, 7.4765146515e+00,
        7.3652038499e+00, 7.2555502501e+00, 7.1475291798e+00, 7.0411163336e+00,
        6.9362877684e+00, 6.8330198972e+00, 6.7312894843e+00, 6.6310736399e+00,
        6.5323498150e+00, 6.4350957964e+00, 6.3392897016e+00, 6.2449099736e+00,
        6.1519353768e+00, 6.0603449913e+00, 5.9701182091e+00, 5.8812347286e+00,
        5.7936745507e+00, 5.7074179741e+00, 5.6224455906e+00, 5.5387382811e+00,
        5.4562772110e+00, 5.3750438263e+00, 5.2950198492e+00, 5.2161872739e+00,
        5.1385283627e+00, 5.0620256421e+00, 4.9866618986e+00, 4.9124201751e+00,
        4.8392837668e+00, 4.7672362178e+00, 4.6962613171e+00, 4.6263430950e+00,
        4.5574658196e+00, 4.4896139932e+00, 4.4227723489e+00, 4.3569258470e+00,
        4.2920596719e+00, 4.2281592283e+00, 4.1652101383e+00, 4.1031982382e+00,
        4.0421095750e+00, 3.9819304035e+00, 3.9226471832e+00, 3.8642465750e+00,
        3.8067154386e+00, 3.7500408292e+00, 3.6942099949e+00, 3.6392103734e+00,
        3.5850295895e+00, 3.5316554525e+00, 3.4790759528e+00, 3.4272792599e+00,
        3.3762537193e+00, 3.3259878500e+00, 3.2764703420e+00, 3.2276900536e+00,
        3.1796360092e+00, 3.1322973962e+00, 3.0856635634e+00, 3.0397240179e+00,
        2.9944684232e+00, 2.9498865964e+00, 2.9059685066e+00, 2.8627042720e+00,
        2.8200841579e+00, 2.7780985746e+00, 2.7367380752e+00, 2.6959933535e+00,
        2.6558552416e+00, 2.6163147084e+00, 2.5773628570e+00, 2.5389909231e+00,
        2.5011902729e+00, 2.4639524010e+00, 2.4272689289e+00, 2.3911316025e+00,
        2.3555322907e+00, 2.3204629837e+00, 2.2859157907e+00, 2.2518829383e+00,
        2.2183567691e+00, 2.1853297396e+00, 2.1527944184e+00, 2.1207434851e+00,
        2.0891697280e+00, 2.0580660429e+00, 2.0274254314e+00, 1.9972409991e+00,
        1.9675059545e+00, 1.9382136070e+00, 1.9093573657e+00, 1.8809307380e+00,
        1.8529273275e+00, 1.8253408336e+00, 1.7981650490e+00, 1.7713938591e+00,
        1.7450212404e+00, 1.7190412588e+00, 1.6934480687e+00, 1.6682359116e+00,
        1.6433991145e+00, 1.6189320893e+00, 1.5948293305e+00, 1.5710854152e+00,
        1.5476950006e+00, 1.5246528240e+00, 1.5019537006e+00, 1.4795925232e+00,
        1.4575642604e+00, 1.4358639556e+00, 1.4144867263e+00, 1.3934277625e+00,
        1.3726823258e+00, 1.3522457485e+00, 1.3321134321e+00, 1.3122808469e+00,
        1.2927435304e+00, 1.2734970866e+00, 1.2545371851e+00, 1.2358595597e+00,
        1.2174600079e+00, 1.1993343898e+00, 1.1814786269e+00, 1.1638887018e+00,
        1.1465606565e+00, 1.1294905922e+00, 1.1126746680e+00, 1.0961091004e+00,
        1.0797901619e+00, 1.0637141808e+00, 1.0478775398e+00, 1.0322766757e+00,
        1.0169080782e+00, 1.0017682893e+00, 9.8685390251e-01, 9.7216156200e-01,
        9.5768796195e-01, 9.4342984573e-01, 9.2938400521e-01, 9.1554728001e-01,
        9.0191655681e-01, 8.8848876864e-01, 8.7526089419e-01, 8.6222995713e-01,
        8.4939302545e-01, 8.3674721079e-01, 8.2428966778e-01, 8.1201759342e-01,
        7.9992822645e-01, 7.8801884670e-01, 7.7628677451e-01, 7.6472937013e-01,
        0.0000000000e+00
    ],
    [
        3.0262638785e+01, 2.9812086791e+01, 2.9368242642e+01, 2.8931006472e+01,
        2.8500279900e+01, 2.8075966012e+01, 2.7657969334e+01, 2.7246195816e+01,
        2.6840552807e+01, 2.6440949036e+01, 2.6047294590e+01, 2.5659500895e+01,
        2.5277480695e+01, 2.4901148036e+01, 2.4530418240e+01, 2.4165207892e+01,
        2.3805434817e+01, 2.3451018066e+01, 2.3101877893e+01, 2.2757935739e+01,
        2.2419114218e+01, 2.2085337091e+01, 2.1756529259e+01, 2.1432616737e+01,
        2.1113526644e+01, 2.0799187185e+01, 2.0489527630e+01, 2.0184478305e+01,
        1.9883970573e+01, 1.9587936818e+01, 1.9296310431e+01, 1.9009025796e+01,
        1.8726018272e+01, 1.8447224181e+01, 1.8172580793e+01, 1.7902026313e+01,
        1.7635499864e+01, 1.7372941477e+01, 1.7114292075e+01, 1.6859493461e+01,
        1.6608488304e+01, 1.6361220127e+01, 1.6117633294e+01, 1.5877672996e+01,
        1.5641285241e+01, 1.5408416842e+01, 1.5179015401e+01, 1.4953029303e+01,
        1.4730407700e+01, 1.4511100500e+01, 1.4295058360e+01, 1.4082232667e+01,
        1.3872575537e+01, 1.3666039794e+01, 1.3462578969e+01, 1.3262147280e+01,
        1.3064699630e+01, 1.2870191593e+01, 1.2678579403e+01, 1.2489819947e+01,
        1.2303870754e+01, 1.2120689983e+01, 1.1940236418e+01, 1.1762469457e+01,
        1.1587349101e+01, 1.1414835948e+01, 1.1244891181e+01, 1.1077476562e+01,
        1.0912554422e+01, 1.0750087653e+01, 1.0590039698e+01, 1.0432374548e+01,
        1.0277056725e+01, 1.0124051284e+01, 9.9733237972e+00, 9.8248403502e+00,
        9.6785675337e+00, 9.5344724357e+00, 9.3925226342e+00, 9.2526861899e+00,
        9.1149316391e+00, 8.9792279864e+00, 8.8455446978e+00, 8.7138516941e+00,
        8.5841193438e+00, 8.4563184565e+00, 8.3304202766e+00, 8.2063964764e+00,
        8.0842191500e+00, 7.9638608070e+00, 7.8452943664e+00, 7.7284931500e+00,
        7.6134308772e+00, 7.5000816585e+00, 7.3884199898e+00, 7.2784207467e+00,
        7.1700591790e+00, 7.0633109049e+00, 6.9581519056e+00, 6.8545585198e+00,
        6.7525074385e+00, 6.6519756999e+00, 6.5529406840e+00, 6.4553801073e+00,
        6.3592720184e+00, 6.2645947925e+00, 6.1713271268e+00, 6.0794480358e+00,
        5.9889368463e+00, 5.8997731928e+00, 5.8119370132e+00, 5.7254085439e+00,
        5.6401683157e+00, 5.5561971492e+00, 5.4734761505e+00, 5.3919867070e+00,
        5.3117104832e+00, 5.2326294167e+00, 5.1547257139e+00, 5.0779818462e+00,
        5.0023805457e+00, 4.9279048021e+00, 4.8545378577e+00, 4.7822632049e+00,
        4.7110645815e+00, 4.6409259675e+00, 4.5718315814e+00, 4.5037658766e+00,
        4.4367135383e+00, 4.3706594791e+00, 4.3055888368e+00, 4.2414869702e+00,
        4.1783394560e+00, 4.1161320858e+00, 4.0548508627e+00, 3.9944819982e+00,
        3.9350119089e+00, 3.8764272140e+00, 3.8187147315e+00, 3.7618614759e+00,
        3.7058546551e+00, 3.6506816671e+00, 3.5963300980e+00, 3.5427877183e+00,
        3.4900424808e+00, 3.4380825175e+00, 3.3868961374e+00, 3.3364718231e+00,
        3.2867982291e+00, 3.2378641785e+00, 3.1896586611e+00, 3.1421708303e+00,
        3.0953900012e+00, 3.0493056479e+00, 3.0039074013e+00, 2.9591850464e+00,
        2.9151285207e+00, 2.8717279113e+00, 2.8289734527e+00, 2.7868555251e+00,
        2.7453646517e+00, 2.7044914969e+00, 2.6642268642e+00, 2.6245616937e+00,
        2.5854870607e+00, 2.5469941732e+00, 2.5090743701e+00, 2.4717191193e+00,
        2.4349200158e+00, 2.3986687796e+00, 2.3629572539e+00, 2.3277774036e+00,
        2.2931213130e+00, 2.2589811844e+00, 2.2253493361e+00, 2.1922182008e+00,
        2.1595803238e+00, 2.1274283615e+00, 2.0957550796e+00, 2.0645533514e+00,
        2.0338161564e+00, 2.0035365786e+00, 1.9737078050e+00, 1.9443231240e+00,
        1.9153759239e+00, 1.8868596915e+00, 1.8587680104e+00, 1.8310945600e+00,
        1.8038331136e+00, 1.7769775373e+00, 1.7505217884e+00, 1.7244599143e+00,
        1.6987860509e+00, 1.6734944216e+00, 1.6485793356e+00, 1.6240351868e+00,
        1.5998564529e+00, 1.5760376934e+00, 1.5525735490e+00, 1.5294587403e+00,
        0.0000000000e+00
    ],
    [
        6.0525277569e+01, 5.9624173581e+01, 5.8736485284e+01, 5.7862012943e+01,
        5.7000559800e+01, 5.6151932023e+01, 5.5315938668e+01, 5.4492391632e+01,
        5.3681105614e+01, 5.2881898072e+01, 5.2094589179e+01, 5.1319001789e+01,
        5.0554961391e+01, 4.9802296072e+01, 4.9060836481e+01, 4.8330415784e+01,
        4.7610869635e+01, 4.6902036132e+01, 4.6203755785e+01, 4.5515871479e+01,
        4.4838228435e+01, 4.4170674182e+01, 4.3513058517e+01, 4.2865233474e+01,
        4.2227053289e+01, 4.1598374369e+01, 4.0979055259e+01, 4.0368956609e+01,
        3.9767941145e+01, 3.9175873636e+01, 3.8592620863e+01, 3.8018051593e+01,
        3.7452036544e+01, 3.6894448362e+01, 3.6345161587e+01, 3.5804052626e+01,
        3.5270999728e+01, 3.4745882954e+01, 3.4228584150e+01, 3.3718986922e+01,
        3.3216976608e+01, 3.2722440254e+01, 3.2235266587e+01, 3.1755345991e+01,
        3.1282570482e+01, 3.0816833683e+01, 3.0358030802e+01, 2.9906058606e+01,
        2.9460815399e+01, 2.9022201000e+01, 2.8590116719e+01, 2.8164465335e+01,
        2.7745151074e+01, 2.7332079589e+01, 2.6925157937e+01, 2.6524294559e+01,
        2.6129399260e+01, 2.5740383186e+01, 2.5357158806e+01, 2.4979639894e+01,
        2.4607741507e+01, 2.4241379965e+01, 2.3880472836e+01, 2.3524938914e+01,
        2.3174698203e+01, 2.2829671896e+01, 2.2489782362e+01, 2.2154953124e+01,
        2.1825108844e+01, 2.1500175305e+01, 2.1180079397e+01, 2.0864749096e+01,
        2.0554113451e+01, 2.0248102568e+01, 1.9946647594e+01, 1.9649680700e+01,
        1.9357135067e+01, 1.9068944871e+01, 1.8785045268e+01, 1.8505372380e+01,
        1.8229863278e+01, 1.7958455973e+01, 1.7691089396e+01, 1.7427703388e+01,
        1.7168238688e+01, 1.6912636913e+01, 1.6660840553e+01, 1.6412792953e+01,
        1.6168438300e+01, 1.5927721614e+01, 1.5690588733e+01, 1.5456986300e+01,
        1.5226861754e+01, 1.5000163317e+01, 1.4776839980e+01, 1.4556841493e+01,
        1.4340118358e+01, 1.4126621810e+01, 1.3916303811e+01, 1.3709117040e+01,
        1.3505014877e+01, 1.3303951400e+01, 1.3105881368e+01, 1.2910760215e+01,
        1.2718544037e+01, 1.2529189585e+01, 1.2342654254e+01, 1.2158896072e+01,
        1.1977873693e+01, 1.1799546386e+01, 1.1623874026e+01, 1.1450817088e+01,
        1.1280336631e+01, 1.1112394298e+01, 1.0946952301e+01, 1.0783973414e+01,
        1.0623420966e+01, 1.0465258833e+01, 1.0309451428e+01, 1.0155963692e+01,
        1.0004761091e+01, 9.8558096041e+00, 9.7090757155e+00, 9.5645264098e+00,
        9.4221291630e+00, 9.2818519349e+00, 9.1436631627e+00, 9.0075317533e+00,
        8.8734270765e+00, 8.7413189583e+00, 8.6111776737e+00, 8.4829739404e+00,
        8.3566789120e+00, 8.2322641717e+00, 8.1097017255e+00, 7.9889639964e+00,
        7.8700238179e+00, 7.7528544280e+00, 7.6374294630e+00, 7.5237229519e+00,
        7.4117093101e+00, 7.3013633343e+00, 7.1926601960e+00, 7.0855754366e+00,
        6.9800849615e+00, 6.8761650350e+00, 6.7737922747e+00, 6.6729436462e+00,
        6.5735964582e+00, 6.4757283571e+00, 6.3793173222e+00, 6.2843416606e+00,
        6.1907800024e+00, 6.0986112958e+00, 6.0078148025e+00, 5.9183700929e+00,
        5.8302570415e+00, 5.7434558225e+00, 5.6579469054e+00, 5.5737110501e+00,
        5.4907293034e+00, 5.4089829939e+00, 5.3284537284e+00, 5.2491233874e+00,
        5.1709741214e+00, 5.0939883464e+00, 5.0181487402e+00, 4.9434382387e+00,
        4.8698400316e+00, 4.7973375591e+00, 4.7259145078e+00, 4.6555548072e+00,
        4.5862426260e+00, 4.5179623688e+00, 4.4506986722e+00, 4.3844364015e+00,
        4.3191606476e+00, 4.2548567230e+00, 4.1915101591e+00, 4.1291067027e+00,
        4.0676323128e+00, 4.0070731572e+00, 3.9474156100e+00, 3.8886462480e+00,
        3.8307518478e+00, 3.7737193829e+00, 3.7175360208e+00, 3.6621891200e+00,
        3.6076662272e+00, 3.5539550746e+00, 3.5010435768e+00, 3.4489198285e+00,
        3.3975721018e+00, 3.3469888432e+00, 3.2971586711e+00, 3.2480703737e+00,
        3.1997129058e+00, 3.1520753868e+00, 3.1051470981e+00, 3.0589174805e+00,
        0.0000000000e+00
    ],
    [
        1.2105055514e+02, 1.1924834716e+02, 1.1747297057e+02, 1.1572402589e+02,
        1.1400111960e+02, 1.1230386405e+02, 1.1063187734e+02, 1.0898478326e+02,
        1.0736221123e+02, 1.0576379614e+02, 1.0418917836e+02, 1.0263800358e+02,
        1.0110992278e+02, 9.9604592145e+01, 9.8121672961e+01, 9.6660831568e+01,
        9.5221739269e+01, 9.3804072264e+01, 9.2407511571e+01, 9.1031742957e+01,
        8.9676456870e+01, 8.8341348364e+01, 8.7026117034e+01, 8.5730466948e+01,
        8.4454106578e+01, 8.3196748738e+01, 8.1958110518e+01, 8.0737913219e+01,
        7.9535882291e+01, 7.8351747271e+01, 7.7185241726e+01, 7.6036103185e+01,
        7.4904073089e+01, 7.3788896724e+01, 7.2690323173e+01, 7.1608105252e+01,
        7.0541999456e+01, 6.9491765907e+01, 6.8457168299e+01, 6.7437973843e+01,
        6.6433953216e+01, 6.5444880508e+01, 6.4470533174e+01, 6.3510691982e+01,
        6.2565140964e+01, 6.1633667367e+01, 6.0716061605e+01, 5.9812117212e+01,
        5.8921630799e+01, 5.8044402001e+01, 5.7180233438e+01, 5.6328930669e+01,
        5.5490302147e+01, 5.4664159177e+01, 5.3850315874e+01, 5.3048589119e+01,
        5.2258798520e+01, 5.1480766372e+01, 5.0714317613e+01, 4.9959279789e+01,
        4.9215483014e+01, 4.8482759930e+01, 4.7760945672e+01, 4.7049877829e+01,
        4.6349396406e+01, 4.5659343793e+01, 4.4979564725e+01, 4.4309906248e+01,
        4.3650217688e+01, 4.3000350611e+01, 4.2360158794e+01, 4.1729498191e+01,
        4.1108226902e+01, 4.0496205137e+01, 3.9893295189e+01, 3.9299361401e+01,
        3.8714270135e+01, 3.8137889743e+01, 3.7570090537e+01, 3.7010744760e+01,
        3.6459726556e+01, 3.5916911945e+01, 3.5382178791e+01, 3.4855406776e+01,
        3.4336477375e+01, 3.3825273826e+01, 3.3321681106e+01, 3.2825585906e+01,
        3.2336876600e+01, 3.1855443228e+01, 3.1381177465e+01, 3.0913972600e+01,
        3.0453723509e+01, 3.0000326634e+01, 2.9553679959e+01, 2.9113682987e+01,
        2.8680236716e+01, 2.8253243620e+01, 2.7832607622e+01, 2.7418234079e+01,
        2.7010029754e+01, 2.6607902800e+01, 2.6211762736e+01, 2.5821520429e+01,
        2.5437088073e+01, 2.5058379170e+01, 2.4685308507e+01, 2.4317792143e+01,
        2.3955747385e+01, 2.3599092771e+01, 2.3247748053e+01, 2.2901634176e+01,
        2.2560673263e+01, 2.2224788597e+01, 2.1893904602e+01, 2.1567946828e+01,
        2.1246841933e+01, 2.0930517667e+01, 2.0618902856e+01, 2.0311927385e+01,
        2.0009522183e+01, 1.9711619208e+01, 1.9418151431e+01, 1.9129052820e+01,
        1.8844258326e+01, 1.8563703870e+01, 1.8287326325e+01, 1.8015063507e+01,
        1.7746854153e+01, 1.7482637917e+01, 1.7222355347e+01, 1.6965947881e+01,
        1.6713357824e+01, 1.6464528343e+01, 1.6219403451e+01, 1.5977927993e+01,
        1.5740047636e+01, 1.5505708856e+01, 1.5274858926e+01, 1.5047445904e+01,
        1.4823418620e+01, 1.4602726669e+01, 1.4385320392e+01, 1.4171150873e+01,
        1.3960169923e+01, 1.3752330070e+01, 1.3547584549e+01, 1.3345887292e+01,
        1.3147192916e+01, 1.2951456714e+01, 1.2758634644e+01, 1.2568683321e+01,
        1.2381560005e+01, 1.2197222592e+01, 1.2015629605e+01, 1.1836740186e+01,
        1.1660514083e+01, 1.1486911645e+01, 1.1315893811e+01, 1.1147422100e+01,
        1.0981458607e+01, 1.0817965988e+01, 1.0656907457e+01, 1.0498246775e+01,
        1.0341948243e+01, 1.0187976693e+01, 1.0036297480e+01, 9.8868764774e+00,
        9.7396800633e+00, 9.5946751182e+00, 9.4518290156e+00, 9.3111096143e+00,
        9.1724852520e+00, 9.0359247376e+00, 8.9013973444e+00, 8.7688728031e+00,
        8.6383212952e+00, 8.5097134460e+00, 8.3830203183e+00, 8.2582134055e+00,
        8.1352646255e+00, 8.0141463144e+00, 7.8948312201e+00, 7.7772924960e+00,
        7.6615036956e+00, 7.5474387659e+00, 7.4350720417e+00, 7.3243782401e+00,
        7.2153324545e+00, 7.1079101491e+00, 7.0020871535e+00, 6.8978396571e+00,
        6.7951442036e+00, 6.6939776863e+00, 6.5943173422e+00, 6.4961407474e+00,
        6.3994258116e+00, 6.3041507736e+00, 6.2102941961e+00, 6.1178349610e+00,
        0.0000000000e+00
    ],
    [
        2.4210111028e+02, 2.3849669432e+02, 2.3494594114e+02, 2.3144805177e+02,
        2.2800223920e+02, 2.2460772809e+02, 2.2126375467e+02, 2.1796956653e+02,
        2.1472442246e+02, 2.1152759229e+02, 2.0837835672e+02, 2.0527600716e+02,
        2.0221984556e+02, 1.9920918429e+02, 1.9624334592e+02, 1.9332166314e+02,
        1.9044347854e+02, 1.8760814453e+02, 1.8481502314e+02, 1.8206348591e+02,
        1.7935291374e+02, 1.7668269673e+02, 1.7405223407e+02, 1.7146093390e+02,
        1.6890821316e+02, 1.6639349748e+02, 1.6391622104e+02, 1.6147582644e+02,
        1.5907176458e+02, 1.5670349454e+02, 1.5437048345e+02, 1.5207220637e+02,
        1.4980814618e+02, 1.4757779345e+02, 1.4538064635e+02, 1.4321621050e+02,
        1.4108399891e+02, 1.3898353181e+02, 1.3691433660e+02, 1.3487594769e+02,
        1.3286790643e+02, 1.3088976102e+02, 1.2894106635e+02, 1.2702138396e+02,
        1.2513028193e+02, 1.2326733473e+02, 1.2143212321e+02, 1.1962423442e+02,
        1.1784326160e+02, 1.1608880400e+02, 1.1436046688e+02, 1.1265786134e+02,
        1.1098060429e+02, 1.0932831835e+02, 1.0770063175e+02, 1.0609717824e+02,
        1.0451759704e+02, 1.0296153274e+02, 1.0142863523e+02, 9.9918559578e+01,
        9.8430966028e+01, 9.6965519861e+01, 9.5521891345e+01, 9.4099755657e+01,
        9.2698792812e+01, 9.1318687586e+01, 8.9959129449e+01, 8.8619812497e+01,
        8.7300435376e+01, 8.6000701222e+01, 8.4720317588e+01, 8.3458996383e+01,
        8.2216453804e+01, 8.0992410274e+01, 7.9786590378e+01, 7.8598722802e+01,
        7.7428540269e+01, 7.6275779485e+01, 7.5140181074e+01, 7.4021489520e+01,
        7.2919453113e+01, 7.1833823891e+01, 7.0764357582e+01, 6.9710813553e+01,
        6.8672954750e+01, 6.7650547652e+01, 6.6643362213e+01, 6.5651171811e+01,
        6.4673753200e+01, 6.3710886456e+01, 6.2762354931e+01, 6.1827945200e+01,
        6.0907447018e+01, 6.0000653268e+01, 5.9107359918e+01, 5.8227365974e+01,
        5.7360473432e+01, 5.6506487239e+01, 5.5665215245e+01, 5.4836468158e+01,
        5.4020059508e+01, 5.3215805600e+01, 5.2423525472e+01, 5.1643040858e+01,
        5.0874176147e+01, 5.0116758340e+01, 4.9370617015e+01, 4.8635584287e+01,
        4.7911494770e+01, 4.7198185543e+01, 4.6495496106e+01, 4.5803268351e+01,
        4.5121346526e+01, 4.4449577194e+01, 4.3787809204e+01, 4.3135893656e+01,
        4.2493683866e+01, 4.1861035334e+01, 4.1237805711e+01, 4.0623854769e+01,
        4.0019044366e+01, 3.9423238416e+01, 3.8836302862e+01, 3.8258105639e+01,
        3.7688516652e+01, 3.7127407740e+01, 3.6574652651e+01, 3.6030127013e+01,
        3.5493708306e+01, 3.4965275833e+01, 3.4444710695e+01, 3.3931895762e+01,
        3.3426715648e+01, 3.2929056687e+01, 3.2438806902e+01, 3.1955855985e+01,
        3.1480095272e+01, 3.1011417712e+01, 3.0549717852e+01, 3.0094891807e+01,
        2.9646837241e+01, 2.9205453337e+01, 2.8770640784e+01, 2.8342301746e+01,
        2.7920339846e+01, 2.7504660140e+01, 2.7095169099e+01, 2.6691774585e+01,
        2.6294385833e+01, 2.5902913428e+01, 2.5517269289e+01, 2.5137366642e+01,
        2.4763120010e+01, 2.4394445183e+01, 2.4031259210e+01, 2.3673480372e+01,
        2.3321028166e+01, 2.2973823290e+01, 2.2631787621e+01, 2.2294844200e+01,
        2.1962917213e+01, 2.1635931975e+01, 2.1313814913e+01, 2.0996493550e+01,
        2.0683896486e+01, 2.0375953386e+01, 2.0072594961e+01, 1.9773752955e+01,
        1.9479360127e+01, 1.9189350236e+01, 1.8903658031e+01, 1.8622219229e+01,
        1.8344970504e+01, 1.8071849475e+01, 1.7802794689e+01, 1.7537745606e+01,
        1.7276642590e+01, 1.7019426892e+01, 1.6766040637e+01, 1.6516426811e+01,
        1.6270529251e+01, 1.6028292629e+01, 1.5789662440e+01, 1.5554584992e+01,
        1.5323007391e+01, 1.5094877532e+01, 1.4870144083e+01, 1.4648756480e+01,
        1.4430664909e+01, 1.4215820298e+01, 1.4004174307e+01, 1.3795679314e+01,
        1.3590288407e+01, 1.3387955373e+01, 1.3188634684e+01, 1.2992281495e+01,
        1.2798851623e+01, 1.2608301547e+01, 1.2420588392e+01, 1.2235669922e+01,
        0.0000000000e+00
    ],
    [
        4.8420222055e+02, 4.7699338865e+02, 4.6989188227e+02, 4.6289610355e+02,
        4.5600447840e+02, 4.4921545618e+02, 4.4252750934e+02, 4.3593913306e+02,
        4.2944884491e+02, 4.2305518457e+02, 4.1675671343e+02, 4.1055201431e+02,
        4.0443969113e+02, 3.9841836858e+02, 3.9248669184e+02, 3.8664332627e+02,
        3.8088695708e+02, 3.7521628906e+02, 3.6963004628e+02, 3.6412697183e+02,
        3.5870582748e+02, 3.5336539346e+02, 3.4810446814e+02, 3.4292186779e+02,
        3.3781642631e+02, 3.3278699495e+02, 3.2783244207e+02, 3.2295165288e+02,
        3.1814352916e+02, 3.1340698909e+02, 3.0874096690e+02, 3.0414441274e+02,
        2.9961629235e+02, 2.9515558690e+02, 2.9076129269e+02, 2.8643242101e+02,
        2.8216799782e+02, 2.7796706363e+02, 2.7382867320e+02, 2.6975189537e+02,
        2.6573581286e+02, 2.6177952203e+02, 2.5788213270e+02, 2.5404276793e+02,
        2.5026056386e+02, 2.4653466947e+02, 2.4286424642e+02, 2.3924846885e+02,
        2.3568652320e+02, 2.3217760800e+02, 2.2872093375e+02, 2.2531572268e+02,
        2.2196120859e+02, 2.1865663671e+02, 2.1540126350e+02, 2.1219435648e+02,
        2.0903519408e+02, 2.0592306549e+02, 2.0285727045e+02, 1.9983711916e+02,
        1.9686193206e+02, 1.9393103972e+02, 1.9104378269e+02, 1.8819951131e+02,
        1.8539758562e+02, 1.8263737517e+02, 1.7991825890e+02, 1.7723962499e+02,
        1.7460087075e+02, 1.7200140244e+02, 1.6944063518e+02, 1.6691799277e+02,
        1.6443290761e+02, 1.6198482055e+02, 1.5957318076e+02, 1.5719744560e+02,
        1.5485708054e+02, 1.5255155897e+02, 1.5028036215e+02, 1.4804297904e+02,
        1.4583890623e+02, 1.4366764778e+02, 1.4152871516e+02, 1.3942162711e+02,
        1.3734590950e+02, 1.3530109530e+02, 1.3328672443e+02, 1.3130234362e+02,
        1.2934750640e+02, 1.2742177291e+02, 1.2552470986e+02, 1.2365589040e+02,
        1.2181489404e+02, 1.2000130654e+02, 1.1821471984e+02, 1.1645473195e+02,
        1.1472094686e+02, 1.1301297448e+02, 1.1133043049e+02, 1.0967293632e+02,
        1.0804011902e+02, 1.0643161120e+02, 1.0484705094e+02, 1.0328608172e+02,
        1.0174835229e+02, 1.0023351668e+02, 9.8741234029e+01, 9.7271168574e+01,
        9.5822989541e+01, 9.4396371085e+01, 9.2990992211e+01, 9.1606536703e+01,
        9.0242693052e+01, 8.8899154387e+01, 8.7575618407e+01, 8.6271787311e+01,
        8.4987367731e+01, 8.3722070667e+01, 8.2475611423e+01, 8.1247709539e+01,
        8.0038088732e+01, 7.8846476833e+01, 7.7672605724e+01, 7.6516211278e+01,
        7.5377033304e+01, 7.4254815479e+01, 7.3149305302e+01, 7.2060254026e+01,
        7.0987416612e+01, 6.9930551666e+01, 6.8889421389e+01, 6.7863791523e+01,
        6.6853431296e+01, 6.5858113373e+01, 6.4877613804e+01, 6.3911711971e+01,
        6.2960190543e+01, 6.2022835424e+01, 6.1099435704e+01, 6.0189783615e+01,
        5.9293674481e+01, 5.8410906674e+01, 5.7541281568e+01, 5.6684603493e+01,
        5.5840679692e+01, 5.5009320280e+01, 5.4190338198e+01, 5.3383549170e+01,
        5.2588771665e+01, 5.1805826857e+01, 5.1034538577e+01, 5.0274733285e+01,
        4.9526240019e+01, 4.8788890367e+01, 4.8062518420e+01, 4.7346960743e+01,
        4.6642056332e+01, 4.5947646580e+01, 4.5263575243e+01, 4.4589688401e+01,
        4.3925834427e+01, 4.3271863951e+01, 4.2627629827e+01, 4.1992987099e+01,
        4.1367792971e+01, 4.0751906771e+01, 4.0145189922e+01, 3.9547505910e+01,
        3.8958720253e+01, 3.8378700473e+01, 3.7807316062e+01, 3.7244438457e+01,
        3.6689941008e+01, 3.6143698950e+01, 3.5605589377e+01, 3.5075491212e+01,
        3.4553285181e+01, 3.4038853784e+01, 3.3532081273e+01, 3.3032853622e+01,
        3.2541058502e+01, 3.2056585258e+01, 3.1579324880e+01, 3.1109169984e+01,
        3.0646014783e+01, 3.0189755064e+01, 2.9740288167e+01, 2.9297512960e+01,
        2.8861329818e+01, 2.8431640596e+01, 2.8008348614e+01, 2.7591358628e+01,
        2.7180576815e+01, 2.6775910745e+01, 2.6377269369e+01, 2.5984562989e+01,
        2.5597703246e+01, 2.5216603094e+01, 2.4841176784e+01, 2.4471339844e+01,
        0.0000000000e+00
    ],
    [
        9.6840444111e+02, 9.5398677730e+02, 9.3978376454e+02, 9.2579220709e+02,
        9.1200895680e+02, 8.9843091237e+02, 8.8505501868e+02, 8.7187826611e+02,
        8.5889768983e+02, 8.4611036914e+02, 8.3351342687e+02, 8.2110402863e+02,
        8.0887938226e+02, 7.9683673716e+02, 7.8497338369e+02, 7.7328665254e+02,
        7.6177391416e+02, 7.5043257811e+02, 7.3926009257e+02, 7.2825394366e+02,
        7.1741165496e+02, 7.0673078691e+02, 6.9620893627e+02, 6.8584373558e+02,
        6.7563285262e+02, 6.6557398991e+02, 6.5566488415e+02, 6.4590330575e+02,
        6.3628705832e+02, 6.2681397817e+02, 6.1748193381e+02, 6.0828882548e+02,
        5.9923258471e+02, 5.9031117380e+02, 5.8152258539e+02, 5.7286484201e+02,
        5.6433599565e+02, 5.5593412726e+02, 5.4765734640e+02, 5.3950379075e+02,
        5.3147162572e+02, 5.2355904406e+02, 5.1576426539e+02, 5.0808553586e+02,
        5.0052112771e+02, 4.9306933893e+02, 4.8572849284e+02, 4.7849693770e+02,
        4.7137304639e+02, 4.6435521601e+02, 4.5744186750e+02, 4.5063144535e+02,
        4.4392241718e+02, 4.3731327342e+02, 4.3080252699e+02, 4.2438871295e+02,
        4.1807038816e+02, 4.1184613097e+02, 4.0571454090e+02, 3.9967423831e+02,
        3.9372386411e+02, 3.8786207944e+02, 3.8208756538e+02, 3.7639902263e+02,
        3.7079517125e+02, 3.6527475034e+02, 3.5983651780e+02, 3.5447924999e+02,
        3.4920174150e+02, 3.4400280489e+02, 3.3888127035e+02, 3.3383598553e+02,
        3.2886581521e+02, 3.2396964110e+02, 3.1914636151e+02, 3.1439489121e+02,
        3.0971416108e+02, 3.0510311794e+02, 3.0056072429e+02, 2.9608595808e+02,
        2.9167781245e+02, 2.8733529556e+02, 2.8305743033e+02, 2.7884325421e+02,
        2.7469181900e+02, 2.7060219061e+02, 2.6657344885e+02, 2.6260468724e+02,
        2.5869501280e+02, 2.5484354583e+02, 2.5104941972e+02, 2.4731178080e+02,
        2.4362978807e+02, 2.4000261307e+02, 2.3642943967e+02, 2.3290946389e+02,
        2.2944189373e+02, 2.2602594896e+02, 2.2266086098e+02, 2.1934587263e+02,
        2.1608023803e+02, 2.1286322240e+02, 2.0969410189e+02, 2.0657216343e+02,
        2.0349670459e+02, 2.0046703336e+02, 1.9748246806e+02, 1.9454233715e+02,
        1.9164597908e+02, 1.8879274217e+02, 1.8598198442e+02, 1.8321307341e+02,
        1.8048538610e+02, 1.7779830877e+02, 1.7515123681e+02, 1.7254357462e+02,
        1.6997473546e+02, 1.6744414133e+02, 1.6495122285e+02, 1.6249541908e+02,
        1.6007617746e+02, 1.5769295367e+02, 1.5534521145e+02, 1.5303242256e+02,
        1.5075406661e+02, 1.4850963096e+02, 1.4629861060e+02, 1.4412050805e+02,
        1.4197483322e+02, 1.3986110333e+02, 1.3777884278e+02, 1.3572758305e+02,
        1.3370686259e+02, 1.3171622675e+02, 1.2975522761e+02, 1.2782342394e+02,
        1.2592038109e+02, 1.2404567085e+02, 1.2219887141e+02, 1.2037956723e+02,
        1.1858734896e+02, 1.1682181335e+02, 1.1508256314e+02, 1.1336920699e+02,
        1.1168135938e+02, 1.1001864056e+02, 1.0838067640e+02, 1.0676709834e+02,
        1.0517754333e+02, 1.0361165371e+02, 1.0206907715e+02, 1.0054946657e+02,
        9.9052480038e+01, 9.7577780733e+01, 9.6125036840e+01, 9.4693921486e+01,
        9.3284112664e+01, 9.1895293160e+01, 9.0527150486e+01, 8.9179376802e+01,
        8.7851668854e+01, 8.6543727902e+01, 8.5255259654e+01, 8.3985974199e+01,
        8.2735585943e+01, 8.1503813542e+01, 8.0290379843e+01, 7.9095011819e+01,
        7.7917440506e+01, 7.6757400946e+01, 7.5614632125e+01, 7.4488876915e+01,
        7.3379882016e+01, 7.2287397901e+01, 7.1211178755e+01, 7.0150982425e+01,
        6.9106570361e+01, 6.8077707568e+01, 6.7064162546e+01, 6.6065707244e+01,
        6.5082117004e+01, 6.4113170515e+01, 6.3158649760e+01, 6.2218339968e+01,
        6.1292029565e+01, 6.0379510127e+01, 5.9480576333e+01, 5.8595025921e+01,
        5.7722659636e+01, 5.6863281193e+01, 5.6016697228e+01, 5.5182717256e+01,
        5.4361153629e+01, 5.3551821491e+01, 5.2754538738e+01, 5.1969125979e+01,
        5.1195406493e+01, 5.0433206189e+01, 4.9682353569e+01, 4.8942679688e+01,
        0.0000000000e+00
    ],
    [
        1.9368088822e+03, 1.9079735546e+03, 1.8795675291e+03, 1.8515844142e+03,
        1.8240179136e+03, 1.7968618247e+03, 1.7701100374e+03, 1.7437565322e+03,
        1.7177953797e+03, 1.6922207383e+03, 1.6670268537e+03, 1.6422080573e+03,
        1.6177587645e+03, 1.5936734743e+03, 1.5699467674e+03, 1.5465733051e+03,
        1.5235478283e+03, 1.5008651562e+03, 1.4785201851e+03, 1.4565078873e+03,
        1.4348233099e+03, 1.4134615738e+03, 1.3924178725e+03, 1.3716874712e+03,
        1.3512657052e+03, 1.3311479798e+03, 1.3113297683e+03, 1.2918066115e+03,
        1.2725741166e+03, 1.2536279563e+03, 1.2349638676e+03, 1.2165776510e+03,
        1.1984651694e+03, 1.1806223476e+03, 1.1630451708e+03, 1.1457296840e+03,
        1.1286719913e+03, 1.1118682545e+03, 1.0953146928e+03, 1.0790075815e+03,
        1.0629432514e+03, 1.0471180881e+03, 1.0315285308e+03, 1.0161710717e+03,
        1.0010422554e+03, 9.8613867787e+02, 9.7145698567e+02, 9.5699387540e+02,
        9.4274609278e+02, 9.2871043201e+02, 9.1488373501e+02, 9.0126289071e+02,
        8.8784483436e+02, 8.7462654684e+02, 8.6160505399e+02, 8.4877742590e+02,
        8.3614077632e+02, 8.2369226194e+02, 8.1142908180e+02, 7.9934847662e+02,
        7.8744772822e+02, 7.7572415889e+02, 7.6417513076e+02, 7.5279804526e+02,
        7.4159034249e+02, 7.3054950068e+02, 7.1967303560e+02, 7.0895849998e+02,
        6.9840348301e+02, 6.8800560977e+02, 6.7776254070e+02, 6.6767197106e+02,
        6.5773163043e+02, 6.4793928219e+02, 6.3829272302e+02, 6.2878978241e+02,
        6.1942832216e+02, 6.1020623588e+02, 6.0112144859e+02, 5.9217191616e+02,
        5.8335562490e+02, 5.7467059113e+02, 5.6611486066e+02, 5.5768650842e+02,
        5.4938363800e+02, 5.4120438122e+02, 5.3314689770e+02, 5.2520937449e+02,
        5.1739002560e+02, 5.0968709165e+02, 5.0209883945e+02, 4.9462356160e+02,
        4.8725957614e+02, 4.8000522614e+02, 4.7285887934e+02, 4.6581892779e+02,
        4.5888378746e+02, 4.5205189792e+02, 4.4532172196e+02, 4.3869174526e+02,
        4.3216047607e+02, 4.2572644480e+02, 4.1938820377e+02, 4.1314432687e+02,
        4.0699340918e+02, 4.0093406672e+02, 3.9496493612e+02, 3.8908467429e+02,
        3.8329195816e+02, 3.7758548434e+02, 3.7196396885e+02, 3.6642614681e+02,
        3.6097077221e+02, 3.5559661755e+02, 3.5030247363e+02, 3.4508714925e+02,
        3.3994947092e+02, 3.3488828267e+02, 3.2990244569e+02, 3.2499083815e+02,
        3.2015235493e+02, 3.1538590733e+02, 3.1069042289e+02, 3.0606484511e+02,
        3.0150813321e+02, 2.9701926192e+02, 2.9259722121e+02, 2.8824101611e+02,
        2.8394966645e+02, 2.7972220666e+02, 2.7555768556e+02, 2.7145516609e+02,
        2.6741372518e+02, 2.6343245349e+02, 2.5951045521e+02, 2.5564684788e+02,
        2.5184076217e+02, 2.4809134169e+02, 2.4439774282e+02, 2.4075913446e+02,
        2.3717469792e+02, 2.3364362670e+02, 2.3016512627e+02, 2.2673841397e+02,
        2.2336271877e+02, 2.2003728112e+02, 2.1676135279e+02, 2.1353419668e+02,
        2.1035508666e+02, 2.0722330743e+02, 2.0413815431e+02, 2.0109893314e+02,
        1.9810496008e+02, 1.9515556147e+02, 1.9225007368e+02, 1.8938784297e+02,
        1.8656822533e+02, 1.8379058632e+02, 1.8105430097e+02, 1.7835875360e+02,
        1.7570333771e+02, 1.7308745580e+02, 1.7051051931e+02, 1.6797194840e+02,
        1.6547117189e+02, 1.6300762708e+02, 1.6058075969e+02, 1.5819002364e+02,
        1.5583488101e+02, 1.5351480189e+02, 1.5122926425e+02, 1.4897775383e+02,
        1.4675976403e+02, 1.4457479580e+02, 1.4242235751e+02, 1.4030196485e+02,
        1.3821314072e+02, 1.3615541514e+02, 1.3412832509e+02, 1.3213141449e+02,
        1.3016423401e+02, 1.2822634103e+02, 1.2631729952e+02, 1.2443667994e+02,
        1.2258405913e+02, 1.2075902025e+02, 1.1896115267e+02, 1.1719005184e+02,
        1.1544531927e+02, 1.1372656239e+02, 1.1203339446e+02, 1.1036543451e+02,
        1.0872230726e+02, 1.0710364298e+02, 1.0550907748e+02, 1.0393825196e+02,
        1.0239081299e+02, 1.0086641238e+02, 9.9364707138e+01, 9.7885359377e+01,
        0.0000000000e+00
    ],
    [
        3.8736177644e+03, 3.8159471092e+03, 3.7591350582e+03, 3.7031688284e+03,
        3.6480358272e+03, 3.5937236495e+03, 3.5402200747e+03, 3.4875130644e+03,
        3.4355907593e+03, 3.3844414766e+03, 3.3340537075e+03, 3.2844161145e+03,
        3.2355175290e+03, 3.1873469486e+03, 3.1398935348e+03, 3.0931466102e+03,
        3.0470956566e+03, 3.0017303125e+03, 2.9570403703e+03, 2.9130157746e+03,
        2.8696466198e+03, 2.8269231477e+03, 2.7848357451e+03, 2.7433749423e+03,
        2.7025314105e+03, 2.6622959596e+03, 2.6226595366e+03, 2.5836132230e+03,
        2.5451482333e+03, 2.5072559127e+03, 2.4699277352e+03, 2.4331553019e+03,
        2.3969303388e+03, 2.3612446952e+03, 2.3260903415e+03, 2.2914593681e+03,
        2.2573439826e+03, 2.2237365090e+03, 2.1906293856e+03, 2.1580151630e+03,
        2.1258865029e+03, 2.0942361762e+03, 2.0630570616e+03, 2.0323421434e+03,
        2.0020845109e+03, 1.9722773557e+03, 1.9429139713e+03, 1.9139877508e+03,
        1.8854921856e+03, 1.8574208640e+03, 1.8297674700e+03, 1.8025257814e+03,
        1.7756896687e+03, 1.7492530937e+03, 1.7232101080e+03, 1.6975548518e+03,
        1.6722815526e+03, 1.6473845239e+03, 1.6228581636e+03, 1.5986969532e+03,
        1.5748954564e+03, 1.5514483178e+03, 1.5283502615e+03, 1.5055960905e+03,
        1.4831806850e+03, 1.4610990014e+03, 1.4393460712e+03, 1.4179170000e+03,
        1.3968069660e+03, 1.3760112195e+03, 1.3555250814e+03, 1.3353439421e+03,
        1.3154632609e+03, 1.2958785644e+03, 1.2765854460e+03, 1.2575795648e+03,
        1.2388566443e+03, 1.2204124718e+03, 1.2022428972e+03, 1.1843438323e+03,
        1.1667112498e+03, 1.1493411823e+03, 1.1322297213e+03, 1.1153730168e+03,
        1.0987672760e+03, 1.0824087624e+03, 1.0662937954e+03, 1.0504187490e+03,
        1.0347800512e+03, 1.0193741833e+03, 1.0041976789e+03, 9.8924712320e+02,
        9.7451915228e+02, 9.6001045228e+02, 9.4571775869e+02, 9.3163785558e+02,
        9.1776757492e+02, 9.0410379583e+02, 8.9064344391e+02, 8.7738349053e+02,
        8.6432095213e+02, 8.5145288959e+02, 8.3877640755e+02, 8.2628865373e+02,
        8.1398681835e+02, 8.0186813344e+02, 7.8992987224e+02, 7.7816934859e+02,
        7.6658391633e+02, 7.5517096868e+02, 7.4392793769e+02, 7.3285229362e+02,
        7.2194154441e+02, 7.1119323510e+02, 7.0060494726e+02, 6.9017429849e+02,
        6.7989894185e+02, 6.6977656534e+02, 6.5980489138e+02, 6.4998167631e+02,
        6.4030470986e+02, 6.3077181466e+02, 6.2138084579e+02, 6.1212969023e+02,
        6.0301626643e+02, 5.9403852383e+02, 5.8519444241e+02, 5.7648203221e+02,
        5.6789933290e+02, 5.5944441333e+02, 5.5111537112e+02, 5.4291033218e+02,
        5.3482745037e+02, 5.2686490699e+02, 5.1902091043e+02, 5.1129369577e+02,
        5.0368152434e+02, 4.9618268339e+02, 4.8879548563e+02, 4.8151826892e+02,
        4.7434939585e+02, 4.6728725339e+02, 4.6033025254e+02, 4.5347682794e+02,
        4.4672543754e+02, 4.4007456224e+02, 4.3352270558e+02, 4.2706839336e+02,
        4.2071017332e+02, 4.1444661485e+02, 4.0827630862e+02, 4.0219786628e+02,
        3.9620992015e+02, 3.9031112293e+02, 3.8450014736e+02, 3.7877568594e+02,
        3.7313645066e+02, 3.6758117264e+02, 3.6210860194e+02, 3.5671750721e+02,
        3.5140667541e+02, 3.4617491161e+02, 3.4102103862e+02, 3.3594389680e+02,
        3.3094234377e+02, 3.2601525417e+02, 3.2116151937e+02, 3.1638004728e+02,
        3.1166976202e+02, 3.0702960378e+02, 3.0245852850e+02, 2.9795550766e+02,
        2.9351952806e+02, 2.8914959160e+02, 2.8484471502e+02, 2.8060392970e+02,
        2.7642628145e+02, 2.7231083027e+02, 2.6825665018e+02, 2.6426282897e+02,
        2.6032846802e+02, 2.5645268206e+02, 2.5263459904e+02, 2.4887335987e+02,
        2.4516811826e+02, 2.4151804051e+02, 2.3792230533e+02, 2.3438010368e+02,
        2.3089063854e+02, 2.2745312477e+02, 2.2406678891e+02, 2.2073086903e+02,
        2.1744461452e+02, 2.1420728596e+02, 2.1101815495e+02, 2.0787650392e+02,
        2.0478162597e+02, 2.0173282475e+02, 1.9872941428e+02, 1.9577071875e+02,
        0.0000000000e+00
    ],
    [
        7.7472355289e+03, 7.6318942184e+03, 7.5182701163e+03, 7.4063376568e+03,
        7.2960716544e+03, 7.1874472990e+03, 7.0804401495e+03, 6.9750261289e+03,
        6.8711815186e+03, 6.7688829532e+03, 6.6681074149e+03, 6.5688322290e+03,
        6.4710350580e+03, 6.3746938973e+03, 6.2797870695e+03, 6.1862932203e+03,
        6.0941913132e+03, 6.0034606249e+03, 5.9140807405e+03, 5.8260315493e+03,
        5.7392932397e+03, 5.6538462953e+03, 5.5696714902e+03, 5.4867498846e+03,
        5.4050628210e+03, 5.3245919193e+03, 5.2453190732e+03, 5.1672264460e+03,
        5.0902964666e+03, 5.0145118254e+03, 4.9398554704e+03, 4.8663106038e+03,
        4.7938606777e+03, 4.7224893904e+03, 4.6521806831e+03, 4.5829187361e+03,
        4.5146879652e+03, 4.4474730181e+03, 4.3812587712e+03, 4.3160303260e+03,
        4.2517730058e+03, 4.1884723525e+03, 4.1261141231e+03, 4.0646842869e+03,
        4.0041690217e+03, 3.9445547115e+03, 3.8858279427e+03, 3.8279755016e+03,
        3.7709843711e+03, 3.7148417281e+03, 3.6595349400e+03, 3.6050515628e+03,
        3.5513793374e+03, 3.4985061874e+03, 3.4464202159e+03, 3.3951097036e+03,
        3.3445631053e+03, 3.2947690478e+03, 3.2457163272e+03, 3.1973939065e+03,
        3.1497909129e+03, 3.1028966355e+03, 3.0567005230e+03, 3.0111921810e+03,
        2.9663613700e+03, 2.9221980027e+03, 2.8786921424e+03, 2.8358339999e+03,
        2.7936139320e+03, 2.7520224391e+03, 2.7110501628e+03, 2.6706878842e+03,
        2.6309265217e+03, 2.5917571288e+03, 2.5531708921e+03, 2.5151591297e+03,
        2.4777132886e+03, 2.4408249435e+03, 2.4044857944e+03, 2.3686876646e+03,
        2.3334224996e+03, 2.2986823645e+03, 2.2644594426e+03, 2.2307460337e+03,
        2.1975345520e+03, 2.1648175249e+03, 2.1325875908e+03, 2.1008374980e+03,
        2.0695601024e+03, 2.0387483666e+03, 2.0083953578e+03, 1.9784942464e+03,
        1.9490383046e+03, 1.9200209046e+03, 1.8914355174e+03, 1.8632757112e+03,
        1.8355351498e+03, 1.8082075917e+03, 1.7812868878e+03, 1.7547669811e+03,
        1.7286419043e+03, 1.7029057792e+03, 1.6775528151e+03, 1.6525773075e+03,
        1.6279736367e+03, 1.6037362669e+03, 1.5798597445e+03, 1.5563386972e+03,
        1.5331678327e+03, 1.5103419374e+03, 1.4878558754e+03, 1.4657045872e+03,
        1.4438830888e+03, 1.4223864702e+03, 1.4012098945e+03, 1.3803485970e+03,
        1.3597978837e+03, 1.3395531307e+03, 1.3196097828e+03, 1.2999633526e+03,
        1.2806094197e+03, 1.2615436293e+03, 1.2427616916e+03, 1.2242593805e+03,
        1.2060325329e+03, 1.1880770477e+03, 1.1703888848e+03, 1.1529640644e+03,
        1.1357986658e+03, 1.1188888267e+03, 1.1022307422e+03, 1.0858206644e+03,
        1.0696549007e+03, 1.0537298140e+03, 1.0380418209e+03, 1.0225873915e+03,
        1.0073630487e+03, 9.9236536678e+02, 9.7759097126e+02, 9.6303653784e+02,
        9.4869879170e+02, 9.3457450679e+02, 9.2066050509e+02, 9.0695365588e+02,
        8.9345087508e+02, 8.8014912449e+02, 8.6704541116e+02, 8.5413678671e+02,
        8.4142034665e+02, 8.2889322971e+02, 8.1655261724e+02, 8.0439573256e+02,
        7.9241984031e+02, 7.8062224587e+02, 7.6900029472e+02, 7.5755137189e+02,
        7.4627290131e+02, 7.3516234528e+02, 7.2421720388e+02, 7.1343501441e+02,
        7.0281335083e+02, 6.9234982321e+02, 6.8204207723e+02, 6.7188779359e+02,
        6.6188468754e+02, 6.5203050834e+02, 6.4232303875e+02, 6.3276009455e+02,
        6.2333952405e+02, 6.1405920757e+02, 6.0491705700e+02, 5.9591101532e+02,
        5.8703905613e+02, 5.7829918321e+02, 5.6968943004e+02, 5.6120785940e+02,
        5.5285256289e+02, 5.4462166054e+02, 5.3651330037e+02, 5.2852565795e+02,
        5.2065693603e+02, 5.1290536412e+02, 5.0526919808e+02, 4.9774671975e+02,
        4.9033623652e+02, 4.8303608102e+02, 4.7584461067e+02, 4.6876020736e+02,
        4.6178127709e+02, 4.5490624954e+02, 4.4813357782e+02, 4.4146173805e+02,
        4.3488922903e+02, 4.2841457192e+02, 4.2203630990e+02, 4.1575300783e+02,
        4.0956325194e+02, 4.0346564951e+02, 3.9745882855e+02, 3.9154143751e+02,
        0.0000000000e+00
    ],
    [
        1.5494471058e+04, 1.5263788437e+04, 1.5036540233e+04, 1.4812675314e+04,
        1.4592143309e+04, 1.4374894598e+04, 1.4160880299e+04, 1.3950052258e+04,
        1.3742363037e+04, 1.3537765906e+04, 1.3336214830e+04, 1.3137664458e+04,
        1.2942070116e+04, 1.2749387795e+04, 1.2559574139e+04, 1.2372586441e+04,
        1.2188382626e+04, 1.2006921250e+04, 1.1828161481e+04, 1.1652063099e+04,
        1.1478586479e+04, 1.1307692591e+04, 1.1139342980e+04, 1.0973499769e+04,
        1.0810125642e+04, 1.0649183839e+04, 1.0490638146e+04, 1.0334452892e+04,
        1.0180592933e+04, 1.0029023651e+04, 9.8797109409e+03, 9.7326212077e+03,
        9.5877213553e+03, 9.4449787807e+03, 9.3043613662e+03, 9.1658374722e+03,
        9.0293759303e+03, 8.8949460361e+03, 8.7625175423e+03, 8.6320606519e+03,
        8.5035460116e+03, 8.3769447050e+03, 8.2522282463e+03, 8.1293685737e+03,
        8.0083380434e+03, 7.8891094230e+03, 7.7716558854e+03, 7.6559510032e+03,
        7.5419687423e+03, 7.4296834561e+03, 7.3190698801e+03, 7.2101031257e+03,
        7.1027586749e+03, 6.9970123747e+03, 6.8928404319e+03, 6.7902194072e+03,
        6.6891262106e+03, 6.5895380956e+03, 6.4914326544e+03, 6.3947878130e+03,
        6.2995818258e+03, 6.2057932711e+03, 6.1134010461e+03, 6.0223843621e+03,
        5.9327227399e+03, 5.8443960055e+03, 5.7573842848e+03, 5.6716679998e+03,
        5.5872278641e+03, 5.5040448782e+03, 5.4221003256e+03, 5.3413757685e+03,
        5.2618530434e+03, 5.1835142575e+03, 5.1063417842e+03, 5.0303182593e+03,
        4.9554265772e+03, 4.8816498871e+03, 4.8089715887e+03, 4.7373753293e+03,
        4.6668449992e+03, 4.5973647290e+03, 4.5289188853e+03, 4.4614920674e+03,
        4.3950691040e+03, 4.3296350497e+03, 4.2651751816e+03, 4.2016749959e+03,
        4.1391202048e+03, 4.0774967332e+03, 4.0167907156e+03, 3.9569884928e+03,
        3.8980766091e+03, 3.8400418091e+03, 3.7828710348e+03, 3.7265514223e+03,
        3.6710702997e+03, 3.6164151833e+03, 3.5625737757e+03, 3.5095339621e+03,
        3.4572838085e+03, 3.4058115584e+03, 3.3551056302e+03, 3.3051546149e+03,
        3.2559472734e+03, 3.2074725337e+03, 3.1597194889e+03, 3.1126773944e+03,
        3.0663356653e+03, 3.0206838747e+03, 2.9757117508e+03, 2.9314091745e+03,
        2.8877661777e+03, 2.8447729404e+03, 2.8024197890e+03, 2.7606971940e+03,
        2.7195957674e+03, 2.6791062614e+03, 2.6392195655e+03, 2.5999267052e+03,
        2.5612188394e+03, 2.5230872587e+03, 2.4855233832e+03, 2.4485187609e+03,
        2.4120650657e+03, 2.3761540953e+03, 2.3407777697e+03, 2.3059281288e+03,
        2.2715973316e+03, 2.2377776533e+03, 2.2044614845e+03, 2.1716413287e+03,
        2.1393098015e+03, 2.1074596279e+03, 2.0760836417e+03, 2.0451747831e+03,
        2.0147260974e+03, 1.9847307336e+03, 1.9551819425e+03, 1.9260730757e+03,
        1.8973975834e+03, 1.8691490136e+03, 1.8413210102e+03, 1.8139073118e+03,
        1.7869017502e+03, 1.7602982490e+03, 1.7340908223e+03, 1.7082735734e+03,
        1.6828406933e+03, 1.6577864594e+03, 1.6331052345e+03, 1.6087914651e+03,
        1.5848396806e+03, 1.5612444917e+03, 1.5380005894e+03, 1.5151027438e+03,
        1.4925458026e+03, 1.4703246906e+03, 1.4484344078e+03, 1.4268700288e+03,
        1.4056267017e+03, 1.3846996464e+03, 1.3640841545e+03, 1.3437755872e+03,
        1.3237693751e+03, 1.3040610167e+03, 1.2846460775e+03, 1.2655201891e+03,
        1.2466790481e+03, 1.2281184151e+03, 1.2098341140e+03, 1.1918220306e+03,
        1.1740781123e+03, 1.1565983664e+03, 1.1393788601e+03, 1.1224157188e+03,
        1.1057051258e+03, 1.0892433211e+03, 1.0730266007e+03, 1.0570513159e+03,
        1.0413138721e+03, 1.0258107282e+03, 1.0105383962e+03, 9.9549343949e+02,
        9.8067247304e+02, 9.6607216203e+02, 9.5168922134e+02, 9.3752041473e+02,
        9.2356255417e+02, 9.0981249908e+02, 8.9626715565e+02, 8.8292347610e+02,
        8.6977845807e+02, 8.5682914385e+02, 8.4407261981e+02, 8.3150601566e+02,
        8.1912650388e+02, 8.0693129902e+02, 7.9491765710e+02, 7.8308287501e+02,
        0.0000000000e+00
    ],
    [
        3.0988942115e+04, 3.0527576874e+04, 3.0073080465e+04, 2.9625350627e+04,
        2.9184286618e+04, 2.8749789196e+04, 2.8321760598e+04, 2.7900104516e+04,
        2.7484726074e+04, 2.7075531813e+04, 2.6672429660e+04, 2.6275328916e+04,
        2.5884140232e+04, 2.5498775589e+04, 2.5119148278e+04, 2.4745172881e+04,
        2.4376765253e+04, 2.4013842500e+04, 2.3656322962e+04, 2.3304126197e+04,
        2.2957172959e+04, 2.2615385181e+04, 2.2278685961e+04, 2.1946999539e+04,
        2.1620251284e+04, 2.1298367677e+04, 2.0981276293e+04, 2.0668905784e+04,
        2.0361185866e+04, 2.0058047301e+04, 1.9759421882e+04, 1.9465242415e+04,
        1.9175442711e+04, 1.8889957561e+04, 1.8608722732e+04, 1.8331674944e+04,
        1.8058751861e+04, 1.7789892072e+04, 1.7525035085e+04, 1.7264121304e+04,
        1.7007092023e+04, 1.6753889410e+04, 1.6504456493e+04, 1.6258737147e+04,
        1.6016676087e+04, 1.5778218846e+04, 1.5543311771e+04, 1.5311902006e+04,
        1.5083937485e+04, 1.4859366912e+04, 1.4638139760e+04, 1.4420206251e+04,
        1.4205517350e+04, 1.3994024749e+04, 1.3785680864e+04, 1.3580438814e+04,
        1.3378252421e+04, 1.3179076191e+04, 1.2982865309e+04, 1.2789575626e+04,
        1.2599163652e+04, 1.2411586542e+04, 1.2226802092e+04, 1.2044768724e+04,
        1.1865445480e+04, 1.1688792011e+04, 1.1514768570e+04, 1.1343336000e+04,
        1.1174455728e+04, 1.1008089756e+04, 1.0844200651e+04, 1.0682751537e+04,
        1.0523706087e+04, 1.0367028515e+04, 1.0212683568e+04, 1.0060636519e+04,
        9.9108531545e+03, 9.7632997741e+03, 9.6179431774e+03, 9.4747506585e+03,
        9.3336899985e+03, 9.1947294580e+03, 9.0578377705e+03, 8.9229841347e+03,
        8.7901382080e+03, 8.6592700995e+03, 8.5303503632e+03, 8.4033499918e+03,
        8.2782404096e+03, 8.1549934664e+03, 8.0335814311e+03, 7.9139769856e+03,
        7.7961532183e+03, 7.6800836183e+03, 7.5657420695e+03, 7.4531028446e+03,
        7.3421405993e+03, 7.2328303667e+03, 7.1251475513e+03, 7.0190679242e+03,
        6.9145676170e+03, 6.8116231167e+03, 6.7102112604e+03, 6.6103092299e+03,
        6.5118945468e+03, 6.4149450675e+03, 6.3194389779e+03, 6.2253547887e+03,
        6.1326713306e+03, 6.0413677495e+03, 5.9514235015e+03, 5.8628183490e+03,
        5.7755323553e+03, 5.6895458808e+03, 5.6048395781e+03, 5.5213943879e+03,
        5.4391915348e+03, 5.3582125227e+03, 5.2784391311e+03, 5.1998534105e+03,
        5.1224376788e+03, 5.0461745173e+03, 4.9710467663e+03, 4.8970375218e+03,
        4.8241301314e+03, 4.7523081907e+03, 4.6815555393e+03, 4.6118562577e+03,
        4.5431946632e+03, 4.4755553066e+03, 4.4089229689e+03, 4.3432826575e+03,
        4.2786196029e+03, 4.2149192559e+03, 4.1521672834e+03, 4.0903495661e+03,
        4.0294521948e+03, 3.9694614671e+03, 3.9103638850e+03, 3.8521461514e+03,
        3.7947951668e+03, 3.7382980272e+03, 3.6826420203e+03, 3.6278146235e+03,
        3.5738035003e+03, 3.5205964979e+03, 3.4681816447e+03, 3.4165471469e+03,
        3.3656813866e+03, 3.3155729188e+03, 3.2662104690e+03, 3.2175829302e+03,
        3.1696793612e+03, 3.1224889835e+03, 3.0760011789e+03, 3.0302054876e+03,
        2.9850916052e+03, 2.9406493811e+03, 2.8968688155e+03, 2.8537400577e+03,
        2.8112534033e+03, 2.7693992929e+03, 2.7281683089e+03, 2.6875511744e+03,
        2.6475387502e+03, 2.6081220333e+03, 2.5692921550e+03, 2.5310403782e+03,
        2.4933580962e+03, 2.4562368303e+03, 2.4196682280e+03, 2.3836440613e+03,
        2.3481562245e+03, 2.3131967328e+03, 2.2787577202e+03, 2.2448314376e+03,
        2.2114102516e+03, 2.1784866422e+03, 2.1460532015e+03, 2.1141026318e+03,
        2.0826277441e+03, 2.0516214565e+03, 2.0210767923e+03, 1.9909868790e+03,
        1.9613449461e+03, 1.9321443241e+03, 1.9033784427e+03, 1.8750408295e+03,
        1.8471251083e+03, 1.8196249982e+03, 1.7925343113e+03, 1.7658469522e+03,
        1.7395569161e+03, 1.7136582877e+03, 1.6881452396e+03, 1.6630120313e+03,
        1.6382530078e+03, 1.6138625980e+03, 1.5898353142e+03, 1.5661657500e+03,
        0.0000000000e+00
    ],
];

/// `threshold[p]` for `p` in `4..=18`: the cutoff between linear counting and
/// the bias-corrected raw estimate in the final selection rule.
pub(super) const THRESHOLD_DATA: [f64; 15] = [
    4.0000000000e+01, 8.0000000000e+01, 1.6000000000e+02, 3.2000000000e+02, 6.4000000000e+02,
    1.2800000000e+03, 2.5600000000e+03, 5.1200000000e+03, 1.0240000000e+04, 2.0480000000e+04,
    4.0960000000e+04, 8.1920000000e+04, 1.6384000000e+05, 3.2768000000e+05, 6.5536000000e+05
];
