mod optimizer; // 优化器测试模块（包含 sgd、trait_tests 子模块）
